//! Error types for the Waymark model layer

use thiserror::Error;

/// Result type alias for model decoding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while decoding server payloads into models
///
/// Construction and accessors on the models themselves never fail; only
/// the JSON decoding surface produces these.
#[derive(Debug, Error)]
pub enum Error {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid payload: {0}")]
    InvalidPayload(String),
}
