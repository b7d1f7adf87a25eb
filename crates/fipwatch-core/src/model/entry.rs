//! A single tracked proposal.

use serde::{Deserialize, Serialize};

/// One proposal row from the registry table.
///
/// Identity is the zero-padded numeric ID: two entries with the same ID in
/// different snapshots describe the same proposal even when the title has
/// drifted between revisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Zero-padded proposal ID, e.g. "0045"
    pub id: String,
    /// Title as it appears in the registry table
    pub title: String,
    /// Normalized lifecycle status, e.g. "Draft", "Final", "Superseded"
    pub status: String,
}

impl Entry {
    /// Create a new entry.
    pub fn new(id: String, title: String, status: String) -> Self {
        Self { id, title, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry() {
        let entry = Entry::new(
            "0001".to_string(),
            "Improved proof security".to_string(),
            "Final".to_string(),
        );
        assert_eq!(entry.id, "0001");
        assert_eq!(entry.status, "Final");
    }

    #[test]
    fn test_entry_serialization_roundtrip() {
        let entry = Entry::new(
            "0045".to_string(),
            "De-duplicate proof inputs".to_string(),
            "Draft".to_string(),
        );
        let json = serde_json::to_string(&entry).unwrap();
        let back: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
