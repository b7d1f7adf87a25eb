//! Month-over-month timeline diff engine.
//!
//! Compares adjacent monthly snapshots and produces a structured,
//! deterministic timeline of registry changes suitable for rendering and
//! export.
//!
//! ## Entry point
//!
//! ```ignore
//! use fipwatch_core::diff::diff_timeline;
//!
//! let timeline = diff_timeline(&store);
//! for change in &timeline.changes {
//!     println!("{}: {} changes", change.month_key, change.change_count());
//! }
//! ```
//!
//! ## Guarantees
//!
//! - **Determinism**: identical stores produce identical timelines; all
//!   change lists are in ascending ID order.
//! - **Baseline silence**: the earliest month anchors the comparison and
//!   never reports its entries as new.
//! - **Noise suppression**: months without changes produce no change-set,
//!   and title drift without a status move is not a change.

pub mod engine;
pub mod model;

pub use engine::diff_timeline;
pub use model::{ChangeSet, StatusChange, Timeline};
