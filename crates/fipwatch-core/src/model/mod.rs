pub mod entry;
pub mod snapshot;

pub use entry::Entry;
pub use snapshot::Snapshot;
