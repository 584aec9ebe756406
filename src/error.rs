//! Crate-level error types.

use std::fmt;

/// Setup-time configuration failures. Always fatal to initialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A layout was requested for an empty item set.
    InvalidTotal {
        /// The rejected item count.
        total: usize,
    },
    /// Two collections that must be index-aligned have different lengths.
    LengthMismatch {
        /// Which collection was checked against the item set.
        what: &'static str,
        /// Length of the item set.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },
    /// An option value that cannot drive the layout or scatter math.
    InvalidOption {
        /// Dotted option name, e.g. `scene.scatter_extent`.
        what: &'static str,
        /// The rejected value, formatted.
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTotal { total } => {
                write!(f, "item count must be positive, got {total}")
            }
            Self::LengthMismatch {
                what,
                expected,
                actual,
            } => write!(
                f,
                "{what} has {actual} entries but the item set has {expected}"
            ),
            Self::InvalidOption { what, value } => {
                write!(f, "{what} must be finite and in range, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors produced by the cardfield crate.
#[derive(Debug)]
pub enum CardfieldError {
    /// Invalid item count or misaligned tables.
    Config(ConfigError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for CardfieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for CardfieldError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<ConfigError> for CardfieldError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<std::io::Error> for CardfieldError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
