//! Structured timeline diff output model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::model::Entry;

/// One proposal whose status moved between two adjacent months.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusChange {
    /// Zero-padded proposal ID
    pub id: String,
    /// Title as of the later month
    pub title: String,
    /// Status in the earlier month
    pub from_status: String,
    /// Status in the later month
    pub to_status: String,
}

/// Every change observed in one month relative to its predecessor.
///
/// Only produced for months with at least one change. All three lists are
/// in ascending ID order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeSet {
    /// Month bucket this change-set describes
    pub month_key: String,
    /// Capture timestamp of the month's snapshot, display metadata only
    pub captured_at: DateTime<Utc>,
    /// Entries present this month but absent the previous month
    pub new_entries: Vec<Entry>,
    /// Entries whose status differs from the previous month
    pub status_changes: Vec<StatusChange>,
    /// Entries present the previous month but absent this month
    pub removed_entries: Vec<Entry>,
}

impl ChangeSet {
    /// True when no additions, status moves, or removals were recorded.
    pub fn is_empty(&self) -> bool {
        self.new_entries.is_empty()
            && self.status_changes.is_empty()
            && self.removed_entries.is_empty()
    }

    /// Total number of recorded changes across all three lists.
    pub fn change_count(&self) -> usize {
        self.new_entries.len() + self.status_changes.len() + self.removed_entries.len()
    }
}

/// Ordered months and their non-empty change-sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline {
    /// Every month key present in the store, ascending
    pub months: Vec<String>,
    /// Change-sets for months that had changes, ascending by month
    pub changes: Vec<ChangeSet>,
}

impl Timeline {
    /// True when no month produced a change-set.
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Serialize the timeline as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Serialization`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn empty_change_set() -> ChangeSet {
        ChangeSet {
            month_key: "2024-02".to_string(),
            captured_at: Utc::now(),
            new_entries: Vec::new(),
            status_changes: Vec::new(),
            removed_entries: Vec::new(),
        }
    }

    #[test]
    fn test_change_set_is_empty() {
        let mut change = empty_change_set();
        assert!(change.is_empty());
        assert_eq!(change.change_count(), 0);

        change.status_changes.push(StatusChange {
            id: "0001".to_string(),
            title: "A proposal".to_string(),
            from_status: "Draft".to_string(),
            to_status: "Final".to_string(),
        });
        assert!(!change.is_empty());
        assert_eq!(change.change_count(), 1);
    }

    #[test]
    fn test_timeline_to_json_is_stable() {
        let timeline = Timeline {
            months: vec!["2024-01".to_string(), "2024-02".to_string()],
            changes: vec![empty_change_set()],
        };
        let a = timeline.to_json().unwrap();
        let b = timeline.to_json().unwrap();
        assert_eq!(a, b);
        assert!(a.contains("\"months\""));
        assert!(a.contains("2024-02"));
    }
}
