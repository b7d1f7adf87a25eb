//! SQLite-backed snapshot archive.
//!
//! The schema is one table keyed by month. Entries are stored as a JSON
//! document per row; months are small (hundreds of entries) so there is
//! nothing to gain from normalizing them into their own table.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use fipwatch_core::{Entry, Snapshot, SnapshotStore};
use rusqlite::{Connection, OptionalExtension};

use crate::errors::{ArchiveError, Result};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS snapshots (
    month_key TEXT PRIMARY KEY,
    source_revision TEXT NOT NULL,
    captured_at TEXT NOT NULL,
    entries TEXT NOT NULL
)";

/// Durable archive of monthly snapshots.
pub struct SnapshotArchive {
    conn: Connection,
}

impl SnapshotArchive {
    /// Open (or create) an archive at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be opened or the schema
    /// cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::init(Connection::open(path)?)
    }

    /// Open an in-memory archive (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error when the schema cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self> {
        conn.execute(SCHEMA, [])?;
        Ok(Self { conn })
    }

    /// Insert or replace the row for the snapshot's month.
    ///
    /// # Errors
    ///
    /// Returns an error when the entries cannot be serialized or the
    /// write fails.
    pub fn upsert(&self, snapshot: &Snapshot) -> Result<()> {
        let entries = serde_json::to_string(&snapshot.entries)?;
        self.conn.execute(
            r#"
            INSERT INTO snapshots (month_key, source_revision, captured_at, entries)
            VALUES (?1, ?2, ?3, ?4)
            ON CONFLICT(month_key) DO UPDATE SET
                source_revision = excluded.source_revision,
                captured_at = excluded.captured_at,
                entries = excluded.entries
            "#,
            rusqlite::params![
                snapshot.month_key,
                snapshot.source_revision,
                snapshot.captured_at.to_rfc3339(),
                entries,
            ],
        )?;

        tracing::debug!(
            month = %snapshot.month_key,
            entries = snapshot.len(),
            "Archived snapshot"
        );

        Ok(())
    }

    /// Fetch one archived month, or `None` when it was never stored.
    ///
    /// # Errors
    ///
    /// Returns an error when the read fails or the stored row no longer
    /// parses.
    pub fn get(&self, month_key: &str) -> Result<Option<Snapshot>> {
        let raw = self
            .conn
            .query_row(
                "SELECT month_key, source_revision, captured_at, entries
                 FROM snapshots WHERE month_key = ?1",
                [month_key],
                row_to_raw,
            )
            .optional()?;
        raw.map(rehydrate).transpose()
    }

    /// All archived month keys in ascending order.
    ///
    /// # Errors
    ///
    /// Returns an error when the read fails.
    pub fn ordered_keys(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT month_key FROM snapshots ORDER BY month_key ASC")?;
        let keys: std::result::Result<Vec<String>, _> =
            stmt.query_map([], |row| row.get(0))?.collect();
        Ok(keys?)
    }

    /// Load the whole archive into an in-memory store.
    ///
    /// # Errors
    ///
    /// Returns an error when the read fails or any stored row no longer
    /// parses.
    pub fn load_store(&self) -> Result<SnapshotStore> {
        let mut stmt = self.conn.prepare(
            "SELECT month_key, source_revision, captured_at, entries
             FROM snapshots ORDER BY month_key ASC",
        )?;
        let raws: std::result::Result<Vec<RawRow>, _> = stmt.query_map([], row_to_raw)?.collect();

        let mut store = SnapshotStore::new();
        for raw in raws? {
            store.put(rehydrate(raw)?);
        }
        Ok(store)
    }
}

/// One row as stored, before timestamps and entries are parsed.
struct RawRow {
    month_key: String,
    source_revision: String,
    captured_at: String,
    entries: String,
}

fn row_to_raw(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawRow> {
    Ok(RawRow {
        month_key: row.get(0)?,
        source_revision: row.get(1)?,
        captured_at: row.get(2)?,
        entries: row.get(3)?,
    })
}

fn rehydrate(raw: RawRow) -> Result<Snapshot> {
    let captured_at: DateTime<Utc> = DateTime::parse_from_rfc3339(&raw.captured_at)
        .map_err(|e| ArchiveError::Timestamp {
            month_key: raw.month_key.clone(),
            message: e.to_string(),
        })?
        .with_timezone(&Utc);
    let entries: BTreeMap<String, Entry> = serde_json::from_str(&raw.entries)?;
    Ok(Snapshot::new(
        raw.month_key,
        entries,
        raw.source_revision,
        captured_at,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample(month: &str, revision: &str, rows: &[(&str, &str, &str)]) -> Snapshot {
        let mut entries = BTreeMap::new();
        for (id, title, status) in rows {
            entries.insert(
                id.to_string(),
                Entry::new(id.to_string(), title.to_string(), status.to_string()),
            );
        }
        Snapshot::new(
            month.to_string(),
            entries,
            revision.to_string(),
            Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_upsert_and_get_round_trip() {
        let archive = SnapshotArchive::open_in_memory().unwrap();
        let snapshot = sample("2024-02", "abc1234", &[("0001", "Proof security", "Draft")]);
        archive.upsert(&snapshot).unwrap();

        let loaded = archive.get("2024-02").unwrap().unwrap();
        assert_eq!(loaded, snapshot);
        assert!(archive.get("2024-01").unwrap().is_none());
    }

    #[test]
    fn test_upsert_replaces_the_month() {
        let archive = SnapshotArchive::open_in_memory().unwrap();
        archive
            .upsert(&sample("2024-02", "aaa1111", &[("0001", "A", "Draft")]))
            .unwrap();
        archive
            .upsert(&sample(
                "2024-02",
                "bbb2222",
                &[("0001", "A", "Accepted"), ("0002", "B", "Draft")],
            ))
            .unwrap();

        let loaded = archive.get("2024-02").unwrap().unwrap();
        assert_eq!(loaded.source_revision, "bbb2222");
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded.entries["0001"].status, "Accepted");
    }

    #[test]
    fn test_ordered_keys_sort_ascending() {
        let archive = SnapshotArchive::open_in_memory().unwrap();
        for month in ["2024-02", "2023-11", "2024-01"] {
            archive
                .upsert(&sample(month, "abc1234", &[("0001", "A", "Draft")]))
                .unwrap();
        }
        assert_eq!(
            archive.ordered_keys().unwrap(),
            vec!["2023-11", "2024-01", "2024-02"]
        );
    }

    #[test]
    fn test_load_store_rebuilds_every_month() {
        let archive = SnapshotArchive::open_in_memory().unwrap();
        archive
            .upsert(&sample("2024-01", "aaa1111", &[("0001", "A", "Draft")]))
            .unwrap();
        archive
            .upsert(&sample("2024-02", "bbb2222", &[("0001", "A", "Accepted")]))
            .unwrap();

        let store = archive.load_store().unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.ordered_keys(), vec!["2024-01", "2024-02"]);
        assert_eq!(
            store.latest().unwrap().entries["0001"].status,
            "Accepted"
        );
    }

    #[test]
    fn test_archive_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("archive.db");

        {
            let archive = SnapshotArchive::open(&path).unwrap();
            archive
                .upsert(&sample("2024-02", "abc1234", &[("0001", "A", "Draft")]))
                .unwrap();
        }

        let archive = SnapshotArchive::open(&path).unwrap();
        let loaded = archive.get("2024-02").unwrap().unwrap();
        assert_eq!(loaded.entries["0001"].title, "A");
    }
}
