//! In-memory snapshot store keyed by month.

use std::collections::BTreeMap;

use crate::model::Snapshot;

/// Month-keyed snapshot collection.
///
/// Holds at most one snapshot per "YYYY-MM" month key; putting a month
/// that already exists replaces it. Keys iterate in lexicographic order,
/// which for this key shape is chronological order.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    snapshots: BTreeMap<String, Snapshot>,
}

impl SnapshotStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a snapshot under its month key, replacing any earlier
    /// snapshot captured for the same month.
    pub fn put(&mut self, snapshot: Snapshot) {
        self.snapshots.insert(snapshot.month_key.clone(), snapshot);
    }

    /// Snapshot for one month, if present.
    pub fn get(&self, month_key: &str) -> Option<&Snapshot> {
        self.snapshots.get(month_key)
    }

    /// All month keys, ascending.
    pub fn ordered_keys(&self) -> Vec<String> {
        self.snapshots.keys().cloned().collect()
    }

    /// Snapshots in ascending month order.
    pub fn snapshots(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.values()
    }

    /// The most recent snapshot, if any.
    pub fn latest(&self) -> Option<&Snapshot> {
        self.snapshots.values().next_back()
    }

    /// Number of months held.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// True when no snapshot has been stored.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entry;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn snapshot(month: &str, revision: &str) -> Snapshot {
        let mut entries = BTreeMap::new();
        entries.insert(
            "0001".to_string(),
            Entry::new("0001".to_string(), "A proposal".to_string(), "Draft".to_string()),
        );
        Snapshot::new(month.to_string(), entries, revision.to_string(), Utc::now())
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = SnapshotStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert!(store.latest().is_none());
    }

    #[test]
    fn test_put_and_get() {
        let mut store = SnapshotStore::new();
        store.put(snapshot("2024-01", "abc1234"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("2024-01").unwrap().source_revision, "abc1234");
        assert!(store.get("2024-02").is_none());
    }

    #[test]
    fn test_put_same_month_replaces() {
        let mut store = SnapshotStore::new();
        store.put(snapshot("2024-01", "abc1234"));
        store.put(snapshot("2024-01", "def5678"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("2024-01").unwrap().source_revision, "def5678");
    }

    #[test]
    fn test_keys_are_chronological() {
        let mut store = SnapshotStore::new();
        store.put(snapshot("2024-03", "c"));
        store.put(snapshot("2023-11", "a"));
        store.put(snapshot("2024-01", "b"));
        assert_eq!(store.ordered_keys(), vec!["2023-11", "2024-01", "2024-03"]);
        assert_eq!(store.latest().unwrap().month_key, "2024-03");
    }
}
