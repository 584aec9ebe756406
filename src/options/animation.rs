use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::util::easing::EasingFunction;

/// Base durations and curve for the three kinds of morph.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[schemars(inline)]
#[serde(default)]
pub struct AnimationOptions {
    /// Base duration of the automatic table morph at startup, in ms.
    pub intro_duration_ms: u64,
    /// Base duration of a layout command morph, in ms.
    pub layout_duration_ms: u64,
    /// Base duration of the table settle on item click, in ms. The focused
    /// item's own move runs four times longer.
    pub focus_duration_ms: u64,
    /// Easing curve shared by every tween.
    pub easing: EasingFunction,
    /// Fixed jitter seed for reproducible runs. `None` draws from the OS.
    pub jitter_seed: Option<u64>,
}

impl AnimationOptions {
    /// Intro base duration.
    #[must_use]
    pub fn intro_duration(&self) -> Duration {
        Duration::from_millis(self.intro_duration_ms)
    }

    /// Layout command base duration.
    #[must_use]
    pub fn layout_duration(&self) -> Duration {
        Duration::from_millis(self.layout_duration_ms)
    }

    /// Focus settle base duration.
    #[must_use]
    pub fn focus_duration(&self) -> Duration {
        Duration::from_millis(self.focus_duration_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            intro_duration_ms: 2000,
            layout_duration_ms: 1000,
            focus_duration_ms: 500,
            easing: EasingFunction::ExponentialInOut,
            jitter_seed: None,
        }
    }
}
