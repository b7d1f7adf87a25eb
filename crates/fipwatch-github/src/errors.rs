//! Error handling for the GitHub adapter.

use thiserror::Error;

/// Result type alias using GithubError
pub type Result<T> = std::result::Result<T, GithubError>;

/// Error taxonomy for acquisition
#[derive(Error, Debug)]
pub enum GithubError {
    /// Transport-level failure (connection, TLS, timeout)
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status without a readable API error body
    #[error("GitHub returned HTTP {code} for {url}")]
    Status { code: u16, url: String },

    /// Non-success HTTP status with a structured API error message
    #[error("GitHub API error (HTTP {code}): {message}")]
    Api { code: u16, message: String },

    /// Response payload could not be decoded
    #[error("Decode error: {context}")]
    Decode { context: String },

    /// An ID-matching pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Neither history nor the current document could be acquired
    #[error("no registry data could be acquired: {reason}")]
    NoData { reason: String },
}
