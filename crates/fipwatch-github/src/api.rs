//! Typed response shapes for the GitHub REST endpoints the acquirer uses.
//!
//! Only the fields consumed downstream are declared; serde ignores the
//! rest of each payload.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::errors::{GithubError, Result};

/// One element of the commits list response.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitInfo {
    /// Full commit SHA
    pub sha: String,
    /// Git-level commit metadata
    pub commit: CommitDetail,
}

/// Git metadata nested under `commit`.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitDetail {
    pub committer: CommitSignature,
    pub message: String,
}

/// Committer identity and timestamp.
#[derive(Debug, Clone, Deserialize)]
pub struct CommitSignature {
    pub date: DateTime<Utc>,
}

impl CommitInfo {
    /// Committer timestamp of the commit.
    pub fn committed_at(&self) -> DateTime<Utc> {
        self.commit.committer.date
    }

    /// First line of the commit message.
    pub fn summary(&self) -> &str {
        self.commit.message.lines().next().unwrap_or_default()
    }

    /// Seven-character revision label used in snapshots.
    pub fn short_sha(&self) -> &str {
        let end = self.sha.char_indices().nth(7).map_or(self.sha.len(), |(i, _)| i);
        &self.sha[..end]
    }
}

/// Contents API response for one file.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentsResponse {
    /// File payload, base64 with embedded newlines
    pub content: String,
    pub encoding: String,
}

impl ContentsResponse {
    /// Decode the payload into UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Decode`] when the encoding is not base64,
    /// the payload is not valid base64, or the bytes are not UTF-8.
    pub fn decode(&self) -> Result<String> {
        if self.encoding != "base64" {
            return Err(GithubError::Decode {
                context: format!("unexpected contents encoding '{}'", self.encoding),
            });
        }
        // The API wraps base64 at 60 columns; strip the line breaks first.
        let packed: String = self.content.chars().filter(|c| !c.is_whitespace()).collect();
        let bytes =
            base64::Engine::decode(&base64::engine::general_purpose::STANDARD, packed.as_bytes())
                .map_err(|err| GithubError::Decode {
                    context: format!("contents payload is not valid base64: {err}"),
                })?;
        String::from_utf8(bytes).map_err(|err| GithubError::Decode {
            context: format!("decoded document is not UTF-8: {err}"),
        })
    }
}

/// One element of the open pulls list response.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    pub number: u64,
    pub title: String,
    pub body: Option<String>,
    pub html_url: String,
    pub user: Option<UserInfo>,
    pub created_at: DateTime<Utc>,
    pub head: BranchRef,
}

/// Author account; can be absent for deleted users.
#[derive(Debug, Clone, Deserialize)]
pub struct UserInfo {
    pub login: String,
}

/// Head branch of a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    #[serde(rename = "ref")]
    pub name: String,
}

impl PullRequest {
    /// Author login, or "unknown" when the account is gone.
    pub fn author(&self) -> &str {
        self.user.as_ref().map_or("unknown", |user| user.login.as_str())
    }

    /// All free text an ID reference can hide in: title, body, branch name.
    pub fn search_text(&self) -> String {
        format!(
            "{} {} {}",
            self.title,
            self.body.as_deref().unwrap_or(""),
            self.head.name
        )
    }
}

/// Error body GitHub attaches to non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}
