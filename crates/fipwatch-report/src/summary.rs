//! Human-readable Markdown digest of a change timeline.

use fipwatch_core::Timeline;

use crate::ReportOptions;

/// Render a Markdown/text digest of a [`Timeline`].
///
/// The digest is intended for issue comments and review notes. It is
/// informational only and does not affect the structured timeline.
pub fn timeline_markdown(timeline: &Timeline, options: &ReportOptions) -> String {
    let mut out = String::new();

    // Header
    out.push_str("## Registry Timeline\n\n");

    if timeline.changes.is_empty() {
        out.push_str("_No status changes tracked yet._\n");
        return out;
    }

    for change in &timeline.changes {
        out.push_str(&format!("### {}\n\n", change.month_key));
        out.push_str(&format!(
            "**{} change{}**\n\n",
            change.change_count(),
            if change.change_count() == 1 { "" } else { "s" }
        ));
        for entry in &change.new_entries {
            out.push_str(&format!(
                "- **New**: `{}` {} ({})\n",
                options.entry_label(&entry.id),
                entry.title,
                entry.status
            ));
        }
        for moved in &change.status_changes {
            out.push_str(&format!(
                "- **Status**: `{}` {}: {} \u{2192} {}\n",
                options.entry_label(&moved.id),
                moved.title,
                moved.from_status,
                moved.to_status
            ));
        }
        for entry in &change.removed_entries {
            out.push_str(&format!(
                "- **Removed**: `{}` {} ({})\n",
                options.entry_label(&entry.id),
                entry.title,
                entry.status
            ));
        }
        out.push('\n');
    }

    out
}
