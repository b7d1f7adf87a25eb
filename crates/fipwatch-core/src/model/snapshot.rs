//! The registry state observed at one revision.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::entry::Entry;

/// Full registry state at one document revision, bucketed to a month.
///
/// Entries are keyed by their zero-padded ID, so iteration order is
/// ascending ID order and two snapshots of the same state compare equal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Month bucket in "YYYY-MM" form (UTC)
    pub month_key: String,
    /// Entries keyed by zero-padded ID
    pub entries: BTreeMap<String, Entry>,
    /// Revision the document was read at: a short commit SHA, or "HEAD"
    /// for the live document. Display metadata only.
    pub source_revision: String,
    /// When the underlying revision was committed (or fetched, for "HEAD")
    pub captured_at: DateTime<Utc>,
}

impl Snapshot {
    /// Create a snapshot from parsed entries.
    pub fn new(
        month_key: String,
        entries: BTreeMap<String, Entry>,
        source_revision: String,
        captured_at: DateTime<Utc>,
    ) -> Self {
        Self {
            month_key,
            entries,
            source_revision,
            captured_at,
        }
    }

    /// Number of entries in this snapshot.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the snapshot holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Histogram of entry statuses, keyed by status text.
    pub fn status_counts(&self) -> BTreeMap<String, usize> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for entry in self.entries.values() {
            *counts.entry(entry.status.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Count of entries whose status matches `status` exactly.
    pub fn count_with_status(&self, status: &str) -> usize {
        self.entries
            .values()
            .filter(|entry| entry.status == status)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_snapshot() -> Snapshot {
        let mut entries = BTreeMap::new();
        for (id, status) in [("0001", "Final"), ("0002", "Draft"), ("0003", "Draft")] {
            entries.insert(
                id.to_string(),
                Entry::new(id.to_string(), format!("Proposal {id}"), status.to_string()),
            );
        }
        Snapshot::new(
            "2024-03".to_string(),
            entries,
            "abc1234".to_string(),
            Utc::now(),
        )
    }

    #[test]
    fn test_len_and_is_empty() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.len(), 3);
        assert!(!snapshot.is_empty());
    }

    #[test]
    fn test_status_counts() {
        let counts = sample_snapshot().status_counts();
        assert_eq!(counts.get("Draft"), Some(&2));
        assert_eq!(counts.get("Final"), Some(&1));
        assert_eq!(counts.get("Rejected"), None);
    }

    #[test]
    fn test_count_with_status_is_exact_match() {
        let snapshot = sample_snapshot();
        assert_eq!(snapshot.count_with_status("Draft"), 2);
        assert_eq!(snapshot.count_with_status("draft"), 0);
    }

    #[test]
    fn test_entries_iterate_in_id_order() {
        let snapshot = sample_snapshot();
        let ids: Vec<&String> = snapshot.entries.keys().collect();
        assert_eq!(ids, vec!["0001", "0002", "0003"]);
    }
}
