//! Error handling for the snapshot archive.

use thiserror::Error;

/// Result type alias using ArchiveError
pub type Result<T> = std::result::Result<T, ArchiveError>;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Bad timestamp archived for {month_key}: {message}")]
    Timestamp { month_key: String, message: String },
}
