//! fipwatch-store - SQLite archive for monthly registry snapshots
//!
//! Keeps every collected snapshot on disk so the change timeline can
//! reach further back than whatever the remote commit listing still
//! returns. One row per month, last write wins.

pub mod archive;
pub mod errors;

// Re-export key types
pub use archive::SnapshotArchive;
pub use errors::{ArchiveError, Result};
