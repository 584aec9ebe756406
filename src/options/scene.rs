use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Scene placement and frame pacing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Point a clicked item flies to, in front of the camera.
    pub focus_point: [f32; 3],
    /// Half-extent of the cube items are scattered in before the intro.
    pub scatter_extent: f32,
    /// Tick rate cap (0 = every frame signal).
    pub target_fps: u32,
}

impl SceneOptions {
    /// Focus point as a vector.
    #[must_use]
    pub fn focus_point(&self) -> Vec3 {
        Vec3::from_array(self.focus_point)
    }

    /// Check the values the scatter and focus math rely on.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidOption`] for a scatter cube wider than `f32`
    /// can hold (including NaN and infinity) or a non-finite focus point.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2.0 * self.scatter_extent).is_finite() {
            return Err(ConfigError::InvalidOption {
                what: "scene.scatter_extent",
                value: self.scatter_extent.to_string(),
            });
        }
        if !self.focus_point().is_finite() {
            return Err(ConfigError::InvalidOption {
                what: "scene.focus_point",
                value: format!("{:?}", self.focus_point),
            });
        }
        Ok(())
    }
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            focus_point: [0.0, 0.0, 2500.0],
            scatter_extent: 2000.0,
            target_fps: 0,
        }
    }
}
