//! Runtime configuration with TOML preset support.
//!
//! Durations, easing, focus placement and frame pacing live here. Options
//! serialize to/from TOML so a host can ship presets alongside its data.

mod animation;
mod scene;

use std::path::Path;

pub use animation::AnimationOptions;
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CardfieldError, ConfigError};

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Transition durations and easing.
    pub animation: AnimationOptions,
    /// Scene placement and frame pacing.
    pub scene: SceneOptions,
}

impl Options {
    /// JSON Schema of the options file, for hosts that validate or edit
    /// presets before handing them to [`Options::load`].
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// I/O failure reading `path`, or malformed TOML.
    pub fn load(path: &Path) -> Result<Self, CardfieldError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`CardfieldError::OptionsParse`] on malformed TOML,
    /// [`CardfieldError::Config`] if a value fails [`Options::validate`].
    pub fn from_toml(content: &str) -> Result<Self, CardfieldError> {
        let options: Self = toml::from_str(content)
            .map_err(|e| CardfieldError::OptionsParse(e.to_string()))?;
        options.validate()?;
        Ok(options)
    }

    /// Reject values the engine cannot run with.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidOption`] naming the first bad value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scene.validate()
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Serialization or I/O failure.
    pub fn save(&self, path: &Path) -> Result<(), CardfieldError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| CardfieldError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
