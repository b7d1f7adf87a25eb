//! Timeline diff computation.

use crate::diff::model::{ChangeSet, StatusChange, Timeline};
use crate::model::Snapshot;
use crate::store::SnapshotStore;

/// Compute the month-over-month timeline across every snapshot in a store.
///
/// Snapshots are visited in ascending month order and compared pairwise:
/// each month against the closest earlier month present. The earliest
/// month is the baseline and yields no change-set; months whose comparison
/// finds nothing are omitted. With fewer than two snapshots the timeline
/// carries no changes.
pub fn diff_timeline(store: &SnapshotStore) -> Timeline {
    let months = store.ordered_keys();
    let mut changes = Vec::new();

    for (previous, current) in store.snapshots().zip(store.snapshots().skip(1)) {
        let change = diff_pair(previous, current);
        if !change.is_empty() {
            changes.push(change);
        }
    }

    Timeline { months, changes }
}

/// Compare two snapshots and collect the later month's change-set.
///
/// BTreeMap iteration keeps all three lists in ascending ID order without
/// an explicit sort.
fn diff_pair(previous: &Snapshot, current: &Snapshot) -> ChangeSet {
    let mut change = ChangeSet {
        month_key: current.month_key.clone(),
        captured_at: current.captured_at,
        new_entries: Vec::new(),
        status_changes: Vec::new(),
        removed_entries: Vec::new(),
    };

    for (id, entry) in &current.entries {
        match previous.entries.get(id) {
            None => change.new_entries.push(entry.clone()),
            Some(before) if before.status != entry.status => {
                change.status_changes.push(StatusChange {
                    id: id.clone(),
                    title: entry.title.clone(),
                    from_status: before.status.clone(),
                    to_status: entry.status.clone(),
                });
            }
            Some(_) => {}
        }
    }

    for (id, entry) in &previous.entries {
        if !current.entries.contains_key(id) {
            change.removed_entries.push(entry.clone());
        }
    }

    // Registry entries are expected to be append-only; a removal usually
    // means the document was restructured, so flag it.
    if !change.removed_entries.is_empty() {
        tracing::warn!(
            month = %change.month_key,
            removed = change.removed_entries.len(),
            "entries disappeared from the registry"
        );
    }

    change
}
