//! Timeline Demonstration
//!
//! This example walks the whole core pipeline on inline documents:
//! parse two monthly revisions of a registry table, store them, and
//! print the computed month-over-month changes.

use chrono::Utc;
use fipwatch_core::{diff_timeline, RegistryParser, Snapshot, SnapshotStore};

const JANUARY: &str = "\
| FIP # | Title | Type | Author | Status |
|-------|-------|------|--------|--------|
| [0001](./fip-0001.md) | Improved proof security | FIP | @alice | Draft |
| [0002](./fip-0002.md) | Easier state migrations | FIP | @bob | Draft |
";

const FEBRUARY: &str = "\
| FIP # | Title | Type | Author | Status |
|-------|-------|------|--------|--------|
| [0001](./fip-0001.md) | Improved proof security | FIP | @alice | Last Call |
| [0002](./fip-0002.md) | Easier state migrations | FIP | @bob | Draft |
| [0003](./fip-0003.md) | Cheaper window proofs | FIP | @carol | Draft |
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== fipwatch timeline demo ===\n");

    let parser = RegistryParser::for_fips()?;
    let mut store = SnapshotStore::new();

    // ===== Part 1: Parse and store two monthly revisions =====
    for (month, revision, document) in [
        ("2024-01", "aaa1111", JANUARY),
        ("2024-02", "bbb2222", FEBRUARY),
    ] {
        let entries = parser.parse(document);
        println!("{month} @ {revision}: {} entries", entries.len());
        store.put(Snapshot::new(
            month.to_string(),
            entries,
            revision.to_string(),
            Utc::now(),
        ));
    }

    // ===== Part 2: Diff the months =====
    let timeline = diff_timeline(&store);
    println!("\nmonths tracked: {:?}", timeline.months);

    for change in &timeline.changes {
        println!("\n{} ({} changes)", change.month_key, change.change_count());
        for entry in &change.new_entries {
            println!("  new      {} {} [{}]", entry.id, entry.title, entry.status);
        }
        for moved in &change.status_changes {
            println!(
                "  moved    {} {} {} -> {}",
                moved.id, moved.title, moved.from_status, moved.to_status
            );
        }
        for entry in &change.removed_entries {
            println!("  removed  {} {}", entry.id, entry.title);
        }
    }

    Ok(())
}
