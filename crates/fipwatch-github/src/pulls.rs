//! Open pull request matching.
//!
//! Relates open PRs to the registry entries they mention by scanning PR
//! title, body, and head branch name for ID references.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::api::PullRequest;
use crate::errors::Result;

/// The reference shapes a PR can use to name an entry: "FIP-0045",
/// "fip 0045", "[0045]", "#0045".
const ID_PATTERNS: &[&str] = &[r"(?i)FIP[-\s]?(\d{4})", r"\[(\d{4})\]", r"#(\d{4})"];

/// A pull request reduced to what the reporters display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PullRef {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Web URL of the PR
    pub url: String,
    /// Author login
    pub author: String,
    /// Head branch name
    pub branch: String,
    /// When the PR was opened
    pub opened_at: DateTime<Utc>,
}

impl From<&PullRequest> for PullRef {
    fn from(pull: &PullRequest) -> Self {
        Self {
            number: pull.number,
            title: pull.title.clone(),
            url: pull.html_url.clone(),
            author: pull.author().to_string(),
            branch: pull.head.name.clone(),
            opened_at: pull.created_at,
        }
    }
}

/// Compiled matcher for entry ID references in free text.
pub struct IdMatcher {
    patterns: Vec<Regex>,
}

impl IdMatcher {
    /// Compile the reference patterns.
    ///
    /// # Errors
    ///
    /// Returns [`crate::GithubError::Pattern`] if a pattern fails to
    /// compile.
    pub fn new() -> Result<Self> {
        let patterns = ID_PATTERNS
            .iter()
            .map(|pattern| Regex::new(pattern))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Every entry ID referenced in `text`, zero-padded, de-duplicated,
    /// ascending.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let mut ids = BTreeSet::new();
        for pattern in &self.patterns {
            for caps in pattern.captures_iter(text) {
                if let Some(id) = caps.get(1) {
                    ids.insert(format!("{:0>4}", id.as_str()));
                }
            }
        }
        ids.into_iter().collect()
    }
}

/// Group open PRs by the entry IDs they reference.
///
/// A PR that references several entries appears under each of them; PRs
/// that reference no entry are dropped.
pub fn relate_pulls(
    matcher: &IdMatcher,
    pulls: &[PullRequest],
) -> BTreeMap<String, Vec<PullRef>> {
    let mut by_id: BTreeMap<String, Vec<PullRef>> = BTreeMap::new();
    for pull in pulls {
        for id in matcher.extract(&pull.search_text()) {
            by_id.entry(id).or_default().push(PullRef::from(pull));
        }
    }
    tracing::debug!(
        pulls = pulls.len(),
        entries = by_id.len(),
        "related open pull requests to entries"
    );
    by_id
}
