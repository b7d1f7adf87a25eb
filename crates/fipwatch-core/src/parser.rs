//! Registry document parser.
//!
//! Extracts the proposal status table from a Markdown registry document
//! (the Filecoin FIPs README by default) into an entry map. The parser is
//! total: malformed rows are skipped, never reported as errors, and an
//! unrecognizable document parses to an empty map.

use regex::Regex;
use std::collections::BTreeMap;

use crate::errors::Result;
use crate::model::Entry;
use crate::normalize::normalize_status;

/// Marker a data row opens with: the linked-ID cell, `| [0001](...)`.
const ROW_MARKER: &str = "| [";

/// Column labels and row filter describing one registry table layout.
///
/// The labels are literal substrings matched against candidate header
/// lines, not column positions; the field layout itself (ID, title, kind,
/// authors, status) is fixed.
#[derive(Debug, Clone)]
pub struct TableProfile {
    /// Literal text of the ID column label in the header row
    pub id_label: String,
    /// Literal text of the status column label in the header row
    pub status_label: String,
    /// Entry kind retained by the parser; rows of any other kind that share
    /// the table (e.g. FRCs in the FIPs README) are dropped
    pub primary_kind: String,
}

impl Default for TableProfile {
    /// Layout of the FIPs table in the filecoin-project/FIPs README.
    fn default() -> Self {
        Self {
            id_label: "FIP #".to_string(),
            status_label: "Status".to_string(),
            primary_kind: "FIP".to_string(),
        }
    }
}

/// Classification of one document line during the table scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    /// Table header carrying both the ID and status column labels
    Header,
    /// Markdown separator row of dashes, pipes, and colons
    Separator,
    /// A data row, recognized by the linked-ID cell marker
    Row,
    /// Anything else: prose, blank lines, unrelated markup
    Other,
}

/// Streaming parser for one table profile.
///
/// Construction compiles the scanning patterns once; `parse` can then be
/// called for every revision of the document.
pub struct RegistryParser {
    profile: TableProfile,
    /// Header marker in the exact form the document writes it, `| <label>`
    header_marker: String,
    separator: Regex,
    id_capture: Regex,
}

impl RegistryParser {
    /// Build a parser for the given table profile.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::Pattern`] if a scanning pattern fails to
    /// compile.
    pub fn new(profile: TableProfile) -> Result<Self> {
        let header_marker = format!("| {}", profile.id_label);
        Ok(Self {
            profile,
            header_marker,
            separator: Regex::new(r"^\|[\s\-|:]+$")?,
            id_capture: Regex::new(r"\[(\d+)\]")?,
        })
    }

    /// Parser for the default FIPs table layout.
    pub fn for_fips() -> Result<Self> {
        Self::new(TableProfile::default())
    }

    /// Parse the first matching status table out of a registry document.
    ///
    /// Scanning starts at the first header line that carries both column
    /// labels and ends at a second such header; rows of a foreign kind and
    /// rows that do not fit the expected shape are skipped silently. A
    /// duplicated ID keeps the last row seen.
    pub fn parse(&self, document: &str) -> BTreeMap<String, Entry> {
        let mut entries = BTreeMap::new();
        let mut in_table = false;

        for line in document.lines() {
            match self.classify(line) {
                LineKind::Header => {
                    if in_table {
                        break;
                    }
                    in_table = true;
                }
                LineKind::Row if in_table => {
                    if let Some(entry) = self.parse_row(line) {
                        entries.insert(entry.id.clone(), entry);
                    }
                }
                LineKind::Separator | LineKind::Row | LineKind::Other => {}
            }
        }

        entries
    }

    fn classify(&self, line: &str) -> LineKind {
        if line.contains(&self.header_marker) && line.contains(&self.profile.status_label) {
            LineKind::Header
        } else if self.separator.is_match(line) {
            LineKind::Separator
        } else if line.starts_with(ROW_MARKER) {
            LineKind::Row
        } else {
            LineKind::Other
        }
    }

    /// Parse one data row, or None when the row does not carry a usable
    /// entry of the primary kind.
    ///
    /// Cells are split on pipes with empty cells dropped, so a row missing
    /// any of its first five cells fails the arity check.
    fn parse_row(&self, line: &str) -> Option<Entry> {
        let fields: Vec<&str> = line
            .split('|')
            .map(str::trim)
            .filter(|field| !field.is_empty())
            .collect();
        if fields.len() < 5 {
            return None;
        }

        let id = self
            .id_capture
            .captures(fields[0])
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())?;

        if !fields[2].eq_ignore_ascii_case(&self.profile.primary_kind) {
            return None;
        }

        Some(Entry {
            id: pad_id(id),
            title: fields[1].to_string(),
            status: normalize_status(fields[4]),
        })
    }
}

/// Zero-pad an ID to at least four digits; longer IDs pass through.
fn pad_id(id: &str) -> String {
    format!("{id:0>4}")
}
