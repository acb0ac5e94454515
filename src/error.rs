//! Error types for canvas decoding, validation and rendering

use thiserror::Error;

use crate::validation::ValidationResult;

/// Result type alias for canvas operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur before or during rendering
#[derive(Error, Debug)]
pub enum Error {
    /// One or more validation rules failed; carries every violation found
    #[error("canvas failed validation: {0}")]
    Validation(ValidationResult),

    /// A drawing does not have exactly two coordinates
    #[error("drawing {index} has {len} coordinates, expected 2")]
    MalformedCoordinates { index: usize, len: usize },

    /// The declared canvas is too large to allocate
    #[error("canvas of {width}x{height} cells is too large to render")]
    CanvasTooLarge { width: i64, height: i64 },

    #[error("invalid canvas JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid canvas TOML: {0}")]
    Toml(#[from] toml::de::Error),
}
