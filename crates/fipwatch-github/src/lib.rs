//! fipwatch-github - GitHub acquisition adapter
//!
//! Recovers the history of a registry document from the GitHub REST API:
//!
//! - Commit listing for the document, bucketed into monthly snapshots
//! - Document content at a specific revision (contents API, base64)
//! - Current document from the raw content host
//! - Open pull requests, related to registry entries by ID references
//!
//! All requests are blocking and strictly sequential; the acquirer owns
//! every timeout and degradation decision so the core stays pure.

pub mod acquire;
pub mod api;
pub mod client;
pub mod config;
pub mod errors;
pub mod pulls;

// Re-export commonly used types
pub use acquire::{collect_monthly_snapshots, month_key_of};
pub use client::GithubClient;
pub use config::GithubConfig;
pub use errors::{GithubError, Result};
pub use pulls::{relate_pulls, IdMatcher, PullRef};
