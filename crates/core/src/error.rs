//! Error types for the chroma-trial core.

use thiserror::Error;

/// Errors produced by color parsing and space conversions.
#[derive(Debug, Error)]
pub enum ColorError {
    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A space transform was mathematically undefined for the input.
    ///
    /// Recoverable by construction: the difference engine treats it as a
    /// failed attempt and resamples.
    #[error("{space} conversion undefined for this input")]
    ConversionFailed { space: &'static str },

    /// A color model name was not recognized.
    #[error("unknown color model: {0}")]
    UnknownModel(String),
}
