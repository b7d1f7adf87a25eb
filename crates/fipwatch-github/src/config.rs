//! Acquirer configuration.

/// Connection and repository settings for the GitHub acquirer.
///
/// Everything that was a fixed endpoint in earlier tooling is a field
/// here, so callers can point the acquirer at another repository or
/// document without touching the adapter.
#[derive(Debug, Clone)]
pub struct GithubConfig {
    /// REST API origin, no trailing slash
    pub api_base: String,
    /// Raw content origin, no trailing slash
    pub raw_base: String,
    /// Repository in "owner/name" form
    pub repo: String,
    /// Path of the registry document inside the repository
    pub document_path: String,
    /// Branch the current (raw) document is read from
    pub branch: String,
    /// API token, sent as `Authorization: token ...` when present
    pub token: Option<String>,
    /// User-Agent header; GitHub rejects requests without one
    pub user_agent: String,
    /// How many months of commit history to walk
    pub history_months: u32,
}

impl Default for GithubConfig {
    /// The Filecoin FIPs registry this tooling tracks by default.
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            raw_base: "https://raw.githubusercontent.com".to_string(),
            repo: "filecoin-project/FIPs".to_string(),
            document_path: "README.md".to_string(),
            branch: "master".to_string(),
            token: None,
            user_agent: "fipwatch".to_string(),
            history_months: 12,
        }
    }
}

impl GithubConfig {
    /// Commits endpoint for the configured repository.
    pub(crate) fn commits_url(&self) -> String {
        format!("{}/repos/{}/commits", self.api_base, self.repo)
    }

    /// Contents endpoint for the registry document.
    pub(crate) fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.api_base, self.repo, self.document_path
        )
    }

    /// Pulls endpoint for the configured repository.
    pub(crate) fn pulls_url(&self) -> String {
        format!("{}/repos/{}/pulls", self.api_base, self.repo)
    }

    /// Raw-content URL of the current registry document.
    pub(crate) fn raw_document_url(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            self.raw_base, self.repo, self.branch, self.document_path
        )
    }
}
