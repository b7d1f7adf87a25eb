//! Current-state dashboard renderer.
//!
//! Renders one snapshot as a standalone HTML page: headline stat cards,
//! a per-status breakdown table with entry links, and the open pull
//! requests grouped by the entry they reference.

use std::collections::BTreeMap;

use chrono::Utc;
use fipwatch_core::{Entry, Snapshot};
use fipwatch_github::PullRef;

use crate::status::status_css_class;
use crate::{clip, html_escape, ReportOptions};

const DASHBOARD_STYLE: &str = r#"
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
.stats-summary {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
    gap: 20px;
    margin-bottom: 30px;
}
.stat-card {
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    padding: 25px;
    border-radius: 8px;
    text-align: center;
}
.stat-card .number { font-size: 2.5em; font-weight: 700; }
.stat-card .label { font-size: 1em; opacity: 0.9; margin-top: 5px; }
.status-table { width: 100%; border-collapse: collapse; }
.status-table th {
    background: #f8f9fa;
    padding: 12px;
    text-align: left;
    border-bottom: 2px solid #667eea;
}
.status-table td {
    padding: 12px;
    border-bottom: 1px solid #e0e0e0;
    vertical-align: top;
}
.status-table .count { font-weight: 700; color: #667eea; }
.status-badge {
    display: inline-block;
    padding: 4px 10px;
    border-radius: 12px;
    font-size: 0.85em;
    font-weight: 600;
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
.fips-list { line-height: 2; }
.fips-list a {
    color: #667eea;
    text-decoration: none;
    margin-right: 10px;
    white-space: nowrap;
}
.fips-list a:hover { text-decoration: underline; }
.pr-badge-small {
    display: inline-block;
    background: #28a745;
    color: white;
    border-radius: 10px;
    padding: 1px 7px;
    font-size: 0.75em;
    font-weight: 600;
    margin-right: 10px;
}
.prs-section .fip-pr-group {
    background: #f8f9fa;
    border-radius: 8px;
    padding: 15px;
    margin-bottom: 15px;
}
.fip-pr-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    margin-bottom: 10px;
    font-weight: 600;
    color: #333;
}
.pr-count {
    background: #28a745;
    color: white;
    padding: 2px 10px;
    border-radius: 10px;
    font-size: 0.85em;
}
.pr-list { list-style: none; }
.pr-item {
    padding: 8px 0;
    border-bottom: 1px solid #e0e0e0;
}
.pr-item:last-child { border-bottom: none; }
.pr-link { color: #667eea; text-decoration: none; font-weight: 600; }
.pr-link:hover { text-decoration: underline; }
.pr-meta { color: #666; font-size: 0.85em; margin-top: 3px; }
.no-prs { text-align: center; padding: 40px; color: #666; font-style: italic; }
.last-updated { text-align: center; padding: 20px; color: #666; font-size: 0.9em; }
"#;

/// Render a snapshot and its related open pull requests as a dashboard.
pub fn dashboard_page(
    snapshot: &Snapshot,
    pulls: &BTreeMap<String, Vec<PullRef>>,
    options: &ReportOptions,
) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("<meta charset=\"UTF-8\">\n");
    out.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    out.push_str(&format!("<title>{}</title>\n", html_escape(&options.title)));
    out.push_str("<style>");
    out.push_str(DASHBOARD_STYLE);
    out.push_str("</style>\n</head>\n<body>\n<div class=\"container\">\n");

    out.push_str("<div class=\"header\">\n");
    out.push_str(&format!("<h1>{}</h1>\n", html_escape(&options.title)));
    out.push_str("<p>Current registry state and open pull requests</p>\n");
    out.push_str("</div>\n<div class=\"content\">\n");

    out.push_str(&stat_cards(snapshot, options));
    out.push_str(&status_breakdown(snapshot, pulls, options));
    out.push_str(&pulls_section(snapshot, pulls, options));

    out.push_str("</div>\n");
    out.push_str(&format!(
        "<div class=\"last-updated\">Last updated: {}</div>\n",
        Utc::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("</div>\n</body>\n</html>\n");
    out
}

/// Headline cards. "Active" counts the two in-flight statuses together.
fn stat_cards(snapshot: &Snapshot, options: &ReportOptions) -> String {
    let active =
        snapshot.count_with_status("Accepted") + snapshot.count_with_status("Last Call");
    let cards = [
        (snapshot.len(), format!("Total {}s", options.entry_prefix)),
        (snapshot.count_with_status("Final"), "Final".to_string()),
        (snapshot.count_with_status("Draft"), "Draft".to_string()),
        (active, "Active (Accepted/Last Call)".to_string()),
    ];

    let mut out = String::from("<div class=\"stats-summary\">\n");
    for (number, label) in cards {
        out.push_str("<div class=\"stat-card\">\n");
        out.push_str(&format!("<div class=\"number\">{number}</div>\n"));
        out.push_str(&format!("<div class=\"label\">{}</div>\n", html_escape(&label)));
        out.push_str("</div>\n");
    }
    out.push_str("</div>\n");
    out
}

fn status_breakdown(
    snapshot: &Snapshot,
    pulls: &BTreeMap<String, Vec<PullRef>>,
    options: &ReportOptions,
) -> String {
    let mut by_status: BTreeMap<&str, Vec<&Entry>> = BTreeMap::new();
    for entry in snapshot.entries.values() {
        by_status.entry(entry.status.as_str()).or_default().push(entry);
    }
    let mut rows: Vec<(&str, Vec<&Entry>)> = by_status.into_iter().collect();
    rows.sort_by(|a, b| b.1.len().cmp(&a.1.len()).then_with(|| a.0.cmp(b.0)));

    let mut out = String::from("<div class=\"section\">\n<h2>Status Breakdown</h2>\n");
    out.push_str("<table class=\"status-table\">\n");
    out.push_str("<tr><th>Status</th><th>Count</th><th>Entries</th></tr>\n");
    for (status, entries) in rows {
        out.push_str("<tr>\n");
        out.push_str(&format!(
            "<td><span class=\"status-badge {}\">{}</span></td>\n",
            status_css_class(status),
            html_escape(status)
        ));
        out.push_str(&format!("<td class=\"count\">{}</td>\n", entries.len()));
        out.push_str("<td><div class=\"fips-list\">\n");
        // Zero-padded IDs keep map order numeric
        for entry in entries {
            out.push_str(&format!(
                "<a href=\"{}\" title=\"{}\" target=\"_blank\">{}</a>",
                options.entry_url(&entry.id),
                html_escape(&entry.title),
                options.entry_label(&entry.id)
            ));
            if let Some(refs) = pulls.get(&entry.id) {
                out.push_str(&format!(
                    "<span class=\"pr-badge-small\" title=\"{} open PR{}\">\u{1F500} {}</span>",
                    refs.len(),
                    plural(refs.len()),
                    refs.len()
                ));
            }
            out.push('\n');
        }
        out.push_str("</div></td>\n</tr>\n");
    }
    out.push_str("</table>\n</div>\n");
    out
}

fn pulls_section(
    snapshot: &Snapshot,
    pulls: &BTreeMap<String, Vec<PullRef>>,
    options: &ReportOptions,
) -> String {
    let mut out = String::from(
        "<div class=\"section prs-section\">\n<h2>Open Pull Requests</h2>\n",
    );
    if pulls.is_empty() {
        out.push_str("<div class=\"no-prs\">No open PRs found.</div>\n");
        out.push_str("</div>\n");
        return out;
    }

    for (id, refs) in pulls {
        let heading = match snapshot.entries.get(id) {
            Some(entry) => format!(
                "{}: {}",
                options.entry_label(id),
                html_escape(&clip(&entry.title, 60))
            ),
            None => options.entry_label(id),
        };
        out.push_str("<div class=\"fip-pr-group\">\n");
        out.push_str("<div class=\"fip-pr-header\">\n");
        out.push_str(&format!("<span>{heading}</span>\n"));
        out.push_str(&format!(
            "<span class=\"pr-count\">{} PR{}</span>\n",
            refs.len(),
            plural(refs.len())
        ));
        out.push_str("</div>\n<ul class=\"pr-list\">\n");
        for pr in refs {
            out.push_str("<li class=\"pr-item\">\n");
            out.push_str(&format!(
                "<a class=\"pr-link\" href=\"{}\" target=\"_blank\">#{}: {}</a>\n",
                pr.url,
                pr.number,
                html_escape(&clip(&pr.title, 80))
            ));
            out.push_str(&format!(
                "<div class=\"pr-meta\">By @{} \u{2022} {}</div>\n",
                html_escape(&pr.author),
                pr.opened_at.format("%Y-%m-%d")
            ));
            out.push_str("</li>\n");
        }
        out.push_str("</ul>\n</div>\n");
    }
    out.push_str("</div>\n");
    out
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_snapshot() -> Snapshot {
        let rows = [
            ("0001", "Proof security", "Final"),
            ("0002", "State migrations", "Draft"),
            ("0003", "Gas accounting", "Accepted"),
            ("0004", "Sector extensions", "Last Call"),
            ("0005", "Retrieval markets", "Draft"),
        ];
        let mut entries = BTreeMap::new();
        for (id, title, status) in rows {
            entries.insert(
                id.to_string(),
                Entry::new(id.to_string(), title.to_string(), status.to_string()),
            );
        }
        Snapshot::new(
            "2024-02".to_string(),
            entries,
            "HEAD".to_string(),
            Utc.with_ymd_and_hms(2024, 2, 20, 8, 0, 0).unwrap(),
        )
    }

    fn sample_pulls() -> BTreeMap<String, Vec<PullRef>> {
        let mut pulls = BTreeMap::new();
        pulls.insert(
            "0002".to_string(),
            vec![
                PullRef {
                    number: 901,
                    title: "Update FIP-0002 after review".to_string(),
                    url: "https://github.com/filecoin-project/FIPs/pull/901".to_string(),
                    author: "alice".to_string(),
                    branch: "fip-0002-review".to_string(),
                    opened_at: Utc.with_ymd_and_hms(2024, 2, 11, 9, 30, 0).unwrap(),
                },
                PullRef {
                    number: 917,
                    title: "FIP-0002 editorial fixes".to_string(),
                    url: "https://github.com/filecoin-project/FIPs/pull/917".to_string(),
                    author: "bob".to_string(),
                    branch: "editorial".to_string(),
                    opened_at: Utc.with_ymd_and_hms(2024, 2, 15, 16, 0, 0).unwrap(),
                },
            ],
        );
        pulls
    }

    #[test]
    fn test_stat_cards_count_statuses() {
        let html = dashboard_page(
            &sample_snapshot(),
            &BTreeMap::new(),
            &ReportOptions::default(),
        );
        assert!(html.contains("Total FIPs"));
        assert!(html.contains("Active (Accepted/Last Call)"));
        // 5 total, 1 final, 2 draft, 2 active
        assert!(html.contains("<div class=\"number\">5</div>"));
        assert!(html.contains("<div class=\"number\">1</div>"));
        assert!(html.contains("<div class=\"number\">2</div>"));
    }

    #[test]
    fn test_breakdown_orders_by_count_then_links_entries() {
        let html = dashboard_page(
            &sample_snapshot(),
            &BTreeMap::new(),
            &ReportOptions::default(),
        );
        // Draft has two entries, every other status one, so it leads
        let draft = html.find("status-badge status-draft").unwrap();
        let final_pos = html.find("status-badge status-final").unwrap();
        assert!(draft < final_pos);
        assert!(html.contains("title=\"State migrations\""));
        assert!(html.contains(
            "https://github.com/filecoin-project/FIPs/blob/master/FIPS/fip-0005.md"
        ));
    }

    #[test]
    fn test_pr_badges_and_groups() {
        let html = dashboard_page(
            &sample_snapshot(),
            &sample_pulls(),
            &ReportOptions::default(),
        );
        assert!(html.contains("pr-badge-small"));
        assert!(html.contains("title=\"2 open PRs\""));
        assert!(html.contains("FIP-0002: State migrations"));
        assert!(html.contains("2 PRs"));
        assert!(html.contains("#901: Update FIP-0002 after review"));
        assert!(html.contains("By @alice \u{2022} 2024-02-11"));
        assert!(!html.contains("No open PRs found."));
    }

    #[test]
    fn test_pull_group_without_snapshot_entry_uses_bare_label() {
        let mut pulls = sample_pulls();
        let refs = pulls.remove("0002").unwrap();
        pulls.insert("9999".to_string(), refs);
        let html = dashboard_page(&sample_snapshot(), &pulls, &ReportOptions::default());
        assert!(html.contains("<span>FIP-9999</span>"));
    }

    #[test]
    fn test_no_pulls_renders_empty_state() {
        let html = dashboard_page(
            &sample_snapshot(),
            &BTreeMap::new(),
            &ReportOptions::default(),
        );
        assert!(html.contains("No open PRs found."));
    }
}
