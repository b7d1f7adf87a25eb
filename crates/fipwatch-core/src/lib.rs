//! fipwatch-core - Registry snapshot model, parser, and timeline diff engine
//!
//! This crate provides the domain layer for tracking a proposal registry
//! (a Markdown status table such as the Filecoin FIPs README) month over
//! month:
//!
//! - Data model: entries, monthly snapshots, change-sets
//! - Parser: first status table of a registry document -> entry map
//! - Store: in-memory month-keyed snapshot collection
//! - Diff: month-over-month change computation
//! - Logging: tracing subscriber initialization
//!
//! Acquisition (GitHub), rendering (HTML/CSV/Markdown), and durable
//! archival (sqlite) live in their own adapter crates on top of this one.

pub mod diff;
pub mod errors;
pub mod logging;
pub mod model;
pub mod normalize;
pub mod parser;
pub mod store;

// Re-export commonly used types
pub use diff::{diff_timeline, ChangeSet, StatusChange, Timeline};
pub use errors::{CoreError, Result};
pub use model::{Entry, Snapshot};
pub use normalize::normalize_status;
pub use parser::{RegistryParser, TableProfile};
pub use store::SnapshotStore;
