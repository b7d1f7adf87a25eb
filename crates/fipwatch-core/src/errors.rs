//! Error handling for core operations.
//!
//! The parser, store, and diff engine are total over their inputs and do
//! not fail; errors only arise at construction time (pattern compilation)
//! and at the serialization boundary used by archives and exports.

use thiserror::Error;

/// Result type alias using CoreError
pub type Result<T> = std::result::Result<T, CoreError>;

/// Error taxonomy for the core crate
#[derive(Error, Debug)]
pub enum CoreError {
    /// A scanning pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization {
            message: err.to_string(),
        }
    }
}
