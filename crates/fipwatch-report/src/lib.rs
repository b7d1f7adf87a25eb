//! fipwatch-report - Presentation renderers
//!
//! Renders core model types into deliverable formats:
//!
//! - HTML: timeline page and current-status dashboard
//! - CSV: timeline rows and status histogram
//! - Markdown: terminal-friendly timeline digest
//!
//! Every renderer is a pure function from model types to a string; the
//! CLI decides where the output goes.

pub mod csv;
pub mod dashboard;
pub mod status;
pub mod summary;
pub mod timeline;

// Re-export commonly used types
pub use csv::{status_counts_csv, timeline_csv};
pub use dashboard::dashboard_page;
pub use status::status_css_class;
pub use summary::timeline_markdown;
pub use timeline::timeline_page;

/// Page-level options shared by the HTML renderers.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Page heading
    pub title: String,
    /// Label prefix entries are displayed with, e.g. "FIP" -> "FIP-0045"
    pub entry_prefix: String,
    /// Link template for one entry's document; `{id}` is replaced by the
    /// zero-padded entry ID
    pub entry_link: String,
}

impl Default for ReportOptions {
    /// Branding and links for the Filecoin FIPs registry.
    fn default() -> Self {
        Self {
            title: "FIP Status Tracker".to_string(),
            entry_prefix: "FIP".to_string(),
            entry_link: "https://github.com/filecoin-project/FIPs/blob/master/FIPS/fip-{id}.md"
                .to_string(),
        }
    }
}

impl ReportOptions {
    /// Web URL of one entry's document.
    pub fn entry_url(&self, id: &str) -> String {
        self.entry_link.replace("{id}", id)
    }

    /// Display label of one entry, e.g. "FIP-0045".
    pub fn entry_label(&self, id: &str) -> String {
        format!("{}-{}", self.entry_prefix, id)
    }
}

/// Escape text interpolated into HTML content or attribute position.
pub(crate) fn html_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Clip display text to `max` characters, marking the cut with an
/// ellipsis.
pub(crate) fn clip(raw: &str, max: usize) -> String {
    if raw.chars().count() <= max {
        raw.to_string()
    } else {
        let kept: String = raw.chars().take(max).collect();
        format!("{kept}...")
    }
}
