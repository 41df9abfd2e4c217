//! Error types for field construction.

use std::fmt;

/// Errors arising from degenerate construction or resize parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Cell resolution must be finite and positive.
    BadResolution {
        /// The offending value.
        value: f32,
    },
    /// Both surface dimensions must be finite and positive.
    BadSurface {
        /// Requested surface width in pixels.
        width: f32,
        /// Requested surface height in pixels.
        height: f32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadResolution { value } => {
                write!(f, "cell resolution must be finite and positive, got {value}")
            }
            Self::BadSurface { width, height } => {
                write!(
                    f,
                    "surface dimensions must be finite and positive, got {width}x{height}"
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}
