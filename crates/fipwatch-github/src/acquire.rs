//! Monthly snapshot acquisition.
//!
//! Walks the registry document's commit history, keeps the newest commit
//! of each month, and parses the document at each kept revision into one
//! snapshot. Failures degrade per month; only a fully empty result is an
//! error.

use chrono::{DateTime, Datelike, Months, Utc};
use fipwatch_core::{RegistryParser, Snapshot, SnapshotStore};
use std::collections::BTreeMap;

use crate::api::CommitInfo;
use crate::client::GithubClient;
use crate::errors::{GithubError, Result};

/// "YYYY-MM" month bucket of a UTC timestamp.
pub fn month_key_of(at: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", at.year(), at.month())
}

/// Start of the acquisition window, `months` before `now`.
///
/// A window wider than chrono's calendar saturates to the Unix epoch,
/// which predates any repository history and so lists every commit.
pub fn history_window_start(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::UNIX_EPOCH)
}

/// Month the live document should fill in, when the commit walk left the
/// current month without a snapshot.
pub fn current_topup_month(store: &SnapshotStore, now: DateTime<Utc>) -> Option<String> {
    let month = month_key_of(now);
    if store.get(&month).is_none() {
        Some(month)
    } else {
        None
    }
}

/// Pick the newest commit of each month, keyed by month, ascending.
pub fn latest_commit_per_month(commits: &[CommitInfo]) -> BTreeMap<String, &CommitInfo> {
    let mut by_month: BTreeMap<String, &CommitInfo> = BTreeMap::new();
    for commit in commits {
        let month = month_key_of(commit.committed_at());
        match by_month.get(&month) {
            Some(kept) if kept.committed_at() >= commit.committed_at() => {}
            _ => {
                by_month.insert(month, commit);
            }
        }
    }
    by_month
}

/// Acquire one snapshot per month over the configured history window.
///
/// The current month is topped up from the raw document when the commit
/// walk did not reach it, so the diff always sees the live state. When no
/// history is listable at all, the result degrades to that single current
/// snapshot.
///
/// # Errors
///
/// Returns [`GithubError::NoData`] only when no month at all yielded a
/// readable document.
pub fn collect_monthly_snapshots(
    client: &GithubClient,
    parser: &RegistryParser,
) -> Result<SnapshotStore> {
    let mut store = SnapshotStore::new();
    let since = history_window_start(Utc::now(), client.config().history_months);

    let commits = match client.list_document_commits(Some(since)) {
        Ok(commits) => commits,
        Err(err) => {
            tracing::warn!(error = %err, "commit listing failed, degrading to current document");
            Vec::new()
        }
    };

    for (month, commit) in latest_commit_per_month(&commits) {
        tracing::debug!(
            month = %month,
            revision = %commit.short_sha(),
            subject = %commit.summary(),
            "fetching document at month's last revision"
        );
        match client.document_at(&commit.sha) {
            Ok(document) => {
                let entries = parser.parse(&document);
                tracing::info!(month = %month, entries = entries.len(), "captured snapshot");
                store.put(Snapshot::new(
                    month,
                    entries,
                    commit.short_sha().to_string(),
                    commit.committed_at(),
                ));
            }
            Err(err) => {
                tracing::warn!(month = %month, error = %err, "skipping month, document fetch failed");
            }
        }
    }

    if let Some(current_month) = current_topup_month(&store, Utc::now()) {
        match client.current_document() {
            Ok(document) => {
                let entries = parser.parse(&document);
                tracing::info!(month = %current_month, entries = entries.len(), "captured current snapshot");
                store.put(Snapshot::new(
                    current_month,
                    entries,
                    "HEAD".to_string(),
                    Utc::now(),
                ));
            }
            Err(err) => {
                tracing::warn!(error = %err, "current document fetch failed");
            }
        }
    }

    if store.is_empty() {
        return Err(GithubError::NoData {
            reason: "no month yielded a readable registry document".to_string(),
        });
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn commit(sha: &str, date: &str) -> CommitInfo {
        serde_json::from_value(json!({
            "sha": sha,
            "commit": {
                "committer": {"date": date},
                "message": format!("commit {sha}")
            }
        }))
        .unwrap()
    }

    #[test]
    fn test_month_key_of_pads_the_month() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 10, 0, 0).unwrap();
        assert_eq!(month_key_of(at), "2024-03");
        let at = Utc.with_ymd_and_hms(2023, 11, 30, 23, 59, 59).unwrap();
        assert_eq!(month_key_of(at), "2023-11");
    }

    #[test]
    fn test_latest_commit_per_month_keeps_newest() {
        let commits = vec![
            commit("aaaaaaa0000000000000000000000000000000000", "2024-01-05T10:00:00Z"),
            commit("bbbbbbb0000000000000000000000000000000000", "2024-01-28T18:00:00Z"),
            commit("ccccccc0000000000000000000000000000000000", "2024-01-15T12:00:00Z"),
            commit("ddddddd0000000000000000000000000000000000", "2024-02-02T08:00:00Z"),
        ];
        let by_month = latest_commit_per_month(&commits);
        assert_eq!(by_month.len(), 2);
        assert_eq!(by_month["2024-01"].short_sha(), "bbbbbbb");
        assert_eq!(by_month["2024-02"].short_sha(), "ddddddd");
    }

    #[test]
    fn test_latest_commit_per_month_orders_ascending() {
        let commits = vec![
            commit("ddddddd0000000000000000000000000000000000", "2024-02-02T08:00:00Z"),
            commit("aaaaaaa0000000000000000000000000000000000", "2023-12-05T10:00:00Z"),
            commit("bbbbbbb0000000000000000000000000000000000", "2024-01-28T18:00:00Z"),
        ];
        let months: Vec<String> = latest_commit_per_month(&commits).into_keys().collect();
        assert_eq!(months, vec!["2023-12", "2024-01", "2024-02"]);
    }

    #[test]
    fn test_latest_commit_per_month_is_empty_for_no_commits() {
        assert!(latest_commit_per_month(&[]).is_empty());
    }

    #[test]
    fn test_history_window_start_subtracts_months() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        let start = history_window_start(now, 12);
        assert_eq!(start, Utc.with_ymd_and_hms(2023, 3, 15, 12, 0, 0).unwrap());
    }

    #[test]
    fn test_history_window_saturates_instead_of_panicking() {
        let now = Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap();
        assert_eq!(history_window_start(now, u32::MAX), DateTime::UNIX_EPOCH);
    }

    #[test]
    fn test_no_topup_when_current_month_already_bucketed() {
        let now = Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap();
        let mut store = SnapshotStore::new();
        store.put(Snapshot::new(
            "2024-02".to_string(),
            BTreeMap::new(),
            "abc1234".to_string(),
            now,
        ));
        assert_eq!(current_topup_month(&store, now), None);
    }

    #[test]
    fn test_topup_fills_current_month_when_absent() {
        let now = Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap();
        let mut store = SnapshotStore::new();
        store.put(Snapshot::new(
            "2024-01".to_string(),
            BTreeMap::new(),
            "abc1234".to_string(),
            Utc.with_ymd_and_hms(2024, 1, 9, 8, 0, 0).unwrap(),
        ));
        assert_eq!(current_topup_month(&store, now), Some("2024-02".to_string()));
        assert!(current_topup_month(&SnapshotStore::new(), now).is_some());
    }
}
