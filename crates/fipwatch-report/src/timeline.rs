//! Timeline page renderer.
//!
//! One standalone HTML page: the current status summary of the latest
//! snapshot on top, the month-over-month change timeline below.

use chrono::Utc;
use fipwatch_core::{ChangeSet, Snapshot, SnapshotStore, Timeline};

use crate::status::status_css_class;
use crate::{clip, html_escape, ReportOptions};

const TIMELINE_STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    min-height: 100vh;
    padding: 20px;
}
.container {
    max-width: 1400px;
    margin: 0 auto;
    background: white;
    border-radius: 12px;
    overflow: hidden;
}
.header {
    background: linear-gradient(135deg, #1e3c72 0%, #2a5298 100%);
    color: white;
    padding: 30px;
    text-align: center;
}
.header h1 { font-size: 2.5em; margin-bottom: 10px; }
.header p { opacity: 0.9; font-size: 1.1em; }
.content { padding: 30px; }
.section { margin-bottom: 40px; }
.section h2 {
    color: #333;
    margin-bottom: 20px;
    border-bottom: 3px solid #667eea;
    padding-bottom: 10px;
}
.status-summary-grid {
    display: grid;
    grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
    gap: 15px;
}
.summary-card {
    background: #f8f9fa;
    padding: 15px;
    border-radius: 8px;
    text-align: center;
    border: 2px solid #e0e0e0;
}
.summary-status {
    font-size: 0.85em;
    font-weight: 600;
    margin-bottom: 8px;
    padding: 4px 8px;
    border-radius: 4px;
    display: inline-block;
}
.summary-count { font-size: 2em; font-weight: 700; color: #667eea; }
.timeline { position: relative; padding-left: 30px; }
.timeline::before {
    content: '';
    position: absolute;
    left: 10px;
    top: 0;
    bottom: 0;
    width: 2px;
    background: #667eea;
}
.timeline-month { position: relative; margin-bottom: 30px; padding-left: 30px; }
.timeline-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 15px;
}
.timeline-header h3 { color: #333; font-size: 1.4em; }
.change-count {
    background: #667eea;
    color: white;
    padding: 4px 12px;
    border-radius: 12px;
    font-size: 0.9em;
    font-weight: 600;
}
.timeline-changes { background: #f8f9fa; border-radius: 8px; padding: 15px; }
.change-item {
    padding: 10px;
    margin-bottom: 8px;
    border-radius: 6px;
    display: flex;
    gap: 10px;
}
.change-item.new { background: #d4edda; border-left: 4px solid #28a745; }
.change-item.status-change { background: #fff3cd; border-left: 4px solid #ffc107; }
.change-item.removed { background: #f8d7da; border-left: 4px solid #dc3545; }
.change-text { flex: 1; line-height: 1.6; }
.change-text a { color: #667eea; text-decoration: none; font-weight: 600; }
.status-badge {
    display: inline-block;
    padding: 4px 8px;
    border-radius: 12px;
    font-size: 0.75em;
    font-weight: 600;
    margin-left: 8px;
}
.status-final { background: #d4edda; color: #155724; }
.status-draft { background: #fff3cd; color: #856404; }
.status-accepted { background: #cce5ff; color: #004085; }
.status-deferred { background: #ffeaa7; color: #856404; }
.status-rejected { background: #f8d7da; color: #721c24; }
.status-withdrawn { background: #e2e3e5; color: #383d41; }
.status-active { background: #d1ecf1; color: #0c5460; }
.status-last-call { background: #f0ad4e; color: #fff; }
.status-superseded { background: #e7e7e7; color: #555; }
.status-change-arrow {
    display: inline-block;
    margin-left: 8px;
    padding: 2px 8px;
    background: white;
    border-radius: 4px;
    font-size: 0.85em;
    font-weight: 600;
}
.no-changes { text-align: center; padding: 40px; color: #666; font-style: italic; }
.last-updated { text-align: center; padding: 20px; color: #666; font-size: 0.9em; }
"#;

/// Render the month-over-month timeline as a standalone HTML page.
///
/// The latest snapshot in the store feeds the status summary; the
/// timeline lists months in ascending order. An empty timeline renders
/// an explicit no-changes state instead of a blank section.
pub fn timeline_page(timeline: &Timeline, store: &SnapshotStore, options: &ReportOptions) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!("<title>{}</title>\n", html_escape(&options.title)));
    out.push_str("<style>");
    out.push_str(TIMELINE_STYLE);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    out.push_str("<div class=\"header\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", html_escape(&options.title)));
    out.push_str("<p>Month-on-month status change tracking</p>\n");
    out.push_str("</div>\n<div class=\"content\">\n");

    out.push_str("<div class=\"section\">\n<h2>Current Status Summary</h2>\n");
    match store.latest() {
        Some(snapshot) => out.push_str(&summary_grid(snapshot)),
        None => out.push_str("<div class=\"no-changes\">No snapshot data yet.</div>\n"),
    }
    out.push_str("</div>\n");

    out.push_str("<div class=\"section\">\n<h2>Status Changes Timeline</h2>\n");
    out.push_str("<div class=\"timeline\">\n");
    if timeline.changes.is_empty() {
        out.push_str(
            "<div class=\"no-changes\">No status changes tracked yet. Historical data \
             will appear here as the registry changes over time.</div>\n",
        );
    } else {
        for change in &timeline.changes {
            out.push_str(&month_section(change, options));
        }
    }
    out.push_str("</div>\n</div>\n</div>\n");

    out.push_str(&format!(
        "<div class=\"last-updated\">Last updated: {}</div>\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// Status histogram cards for the latest snapshot, most common first.
fn summary_grid(snapshot: &Snapshot) -> String {
    let mut counts: Vec<(String, usize)> = snapshot.status_counts().into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut out = String::from("<div class=\"status-summary-grid\">\n");
    for (status, count) in counts {
        out.push_str("<div class=\"summary-card\">\n");
        out.push_str(&format!(
            "<div class=\"summary-status {}\">{}</div>\n",
            status_css_class(&status),
            html_escape(&status)
        ));
        out.push_str(&format!("<div class=\"summary-count\">{count}</div>\n"));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}

/// One month block of the timeline.
fn month_section(change: &ChangeSet, options: &ReportOptions) -> String {
    let mut out = String::from("<div class=\"timeline-month\">\n");
    out.push_str("<div class=\"timeline-header\">\n");
    out.push_str(&format!("<h3>{}</h3>\n", change.captured_at.format("%B %Y")));
    out.push_str(&format!(
        "<span class=\"change-count\">{} changes</span>\n",
        change.change_count()
    ));
    out.push_str("</div>\n<div class=\"timeline-changes\">\n");

    for entry in &change.new_entries {
        out.push_str("<div class=\"change-item new\">\n");
        out.push_str("<span class=\"change-icon\">\u{2795}</span>\n");
        out.push_str(&format!(
            "<span class=\"change-text\"><strong>New:</strong> <a href=\"{}\" target=\"_blank\">{}</a> - {} <span class=\"status-badge {}\">{}</span></span>\n",
            options.entry_url(&entry.id),
            options.entry_label(&entry.id),
            html_escape(&clip(&entry.title, 60)),
            status_css_class(&entry.status),
            html_escape(&entry.status)
        ));
        out.push_str("</div>\n");
    }

    for moved in &change.status_changes {
        out.push_str("<div class=\"change-item status-change\">\n");
        out.push_str("<span class=\"change-icon\">\u{1F504}</span>\n");
        out.push_str(&format!(
            "<span class=\"change-text\"><strong>Status Change:</strong> <a href=\"{}\" target=\"_blank\">{}</a> - {} <span class=\"status-change-arrow\">{} \u{2192} {}</span></span>\n",
            options.entry_url(&moved.id),
            options.entry_label(&moved.id),
            html_escape(&clip(&moved.title, 50)),
            html_escape(&moved.from_status),
            html_escape(&moved.to_status)
        ));
        out.push_str("</div>\n");
    }

    for entry in &change.removed_entries {
        out.push_str("<div class=\"change-item removed\">\n");
        out.push_str("<span class=\"change-icon\">\u{2796}</span>\n");
        out.push_str(&format!(
            "<span class=\"change-text\"><strong>Removed:</strong> {} - {}</span>\n",
            options.entry_label(&entry.id),
            html_escape(&clip(&entry.title, 60))
        ));
        out.push_str("</div>\n");
    }

    out.push_str("</div>\n</div>\n");
    out
}
