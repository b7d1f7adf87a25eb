//! CSV exports for spreadsheets and downstream scripts.

use fipwatch_core::{Snapshot, Timeline};

/// One row per change across the whole timeline.
///
/// Columns: `month,kind,id,title,from_status,to_status`. New entries
/// leave `from_status` empty, removed entries leave `to_status` empty.
pub fn timeline_csv(timeline: &Timeline) -> String {
    let mut out = String::from("month,kind,id,title,from_status,to_status\n");
    for change in &timeline.changes {
        for entry in &change.new_entries {
            push_row(
                &mut out,
                &change.month_key,
                "new",
                &entry.id,
                &entry.title,
                "",
                &entry.status,
            );
        }
        for moved in &change.status_changes {
            push_row(
                &mut out,
                &change.month_key,
                "status_change",
                &moved.id,
                &moved.title,
                &moved.from_status,
                &moved.to_status,
            );
        }
        for entry in &change.removed_entries {
            push_row(
                &mut out,
                &change.month_key,
                "removed",
                &entry.id,
                &entry.title,
                &entry.status,
                "",
            );
        }
    }
    out
}

/// Status histogram of one snapshot, most common status first.
pub fn status_counts_csv(snapshot: &Snapshot) -> String {
    let mut counts: Vec<(String, usize)> = snapshot.status_counts().into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut out = String::from("status,count\n");
    for (status, count) in counts {
        out.push_str(&format!("{},{count}\n", csv_field(&status)));
    }
    out
}

fn push_row(out: &mut String, month: &str, kind: &str, id: &str, title: &str, from: &str, to: &str) {
    out.push_str(&format!(
        "{},{},{},{},{},{}\n",
        csv_field(month),
        kind,
        csv_field(id),
        csv_field(title),
        csv_field(from),
        csv_field(to)
    ));
}

/// RFC 4180 quoting: wrap when the field holds a delimiter, quote, or
/// line break, and double any embedded quotes.
fn csv_field(raw: &str) -> String {
    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use fipwatch_core::{ChangeSet, Entry, StatusChange};
    use std::collections::BTreeMap;

    fn sample_timeline() -> Timeline {
        Timeline {
            months: vec!["2024-01".to_string(), "2024-02".to_string()],
            changes: vec![ChangeSet {
                month_key: "2024-02".to_string(),
                captured_at: Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
                new_entries: vec![Entry::new(
                    "0002".to_string(),
                    "State, migrations".to_string(),
                    "Draft".to_string(),
                )],
                status_changes: vec![StatusChange {
                    id: "0001".to_string(),
                    title: "Proof security".to_string(),
                    from_status: "Draft".to_string(),
                    to_status: "Accepted".to_string(),
                }],
                removed_entries: vec![Entry::new(
                    "0003".to_string(),
                    "Old \"draft\" idea".to_string(),
                    "Withdrawn".to_string(),
                )],
            }],
        }
    }

    #[test]
    fn test_timeline_rows_cover_all_change_kinds() {
        let csv = timeline_csv(&sample_timeline());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "month,kind,id,title,from_status,to_status");
        assert_eq!(lines[1], "2024-02,new,0002,\"State, migrations\",,Draft");
        assert_eq!(
            lines[2],
            "2024-02,status_change,0001,Proof security,Draft,Accepted"
        );
        assert_eq!(
            lines[3],
            "2024-02,removed,0003,\"Old \"\"draft\"\" idea\",Withdrawn,"
        );
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_empty_timeline_is_header_only() {
        let timeline = Timeline {
            months: Vec::new(),
            changes: Vec::new(),
        };
        assert_eq!(timeline_csv(&timeline), "month,kind,id,title,from_status,to_status\n");
    }

    #[test]
    fn test_status_counts_order_by_count_then_name() {
        let rows = [
            ("0001", "A", "Final"),
            ("0002", "B", "Draft"),
            ("0003", "C", "Draft"),
            ("0004", "D", "Accepted"),
        ];
        let mut entries = BTreeMap::new();
        for (id, title, status) in rows {
            entries.insert(
                id.to_string(),
                Entry::new(id.to_string(), title.to_string(), status.to_string()),
            );
        }
        let snapshot = Snapshot::new(
            "2024-02".to_string(),
            entries,
            "HEAD".to_string(),
            Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
        );
        assert_eq!(
            status_counts_csv(&snapshot),
            "status,count\nDraft,2\nAccepted,1\nFinal,1\n"
        );
    }

    #[test]
    fn test_csv_field_quotes_only_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("with, comma"), "\"with, comma\"");
        assert_eq!(csv_field("line\nbreak"), "\"line\nbreak\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
