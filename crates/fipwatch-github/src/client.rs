//! Blocking HTTP client for the GitHub REST API.

use chrono::{DateTime, Utc};
use reqwest::blocking::{Client, Response};
use std::time::Duration;

use crate::api::{ApiErrorBody, CommitInfo, ContentsResponse, PullRequest};
use crate::config::GithubConfig;
use crate::errors::{GithubError, Result};

/// Per-request timeout; acquisition is sequential, so a hung request
/// would stall the whole pass.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper over a blocking reqwest client with the repository
/// configuration baked in.
pub struct GithubClient {
    config: GithubConfig,
    http: Client,
}

impl GithubClient {
    /// Build a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Http`] if the underlying client cannot be
    /// constructed.
    pub fn new(config: GithubConfig) -> Result<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.clone())
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, http })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &GithubConfig {
        &self.config
    }

    /// List commits that touched the registry document, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Http`], [`GithubError::Status`], or
    /// [`GithubError::Api`] when the listing fails.
    pub fn list_document_commits(&self, since: Option<DateTime<Utc>>) -> Result<Vec<CommitInfo>> {
        let mut query = vec![
            ("path", self.config.document_path.clone()),
            ("per_page", "100".to_string()),
        ];
        if let Some(since) = since {
            query.push(("since", since.to_rfc3339()));
        }
        let commits: Vec<CommitInfo> = self.get(&self.config.commits_url(), &query)?.json()?;
        tracing::debug!(count = commits.len(), "listed document commits");
        Ok(commits)
    }

    /// Fetch the registry document as of a specific revision.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::list_document_commits`], plus
    /// [`GithubError::Decode`] when the contents payload does not decode.
    pub fn document_at(&self, revision: &str) -> Result<String> {
        let contents: ContentsResponse = self
            .get(
                &self.config.contents_url(),
                &[("ref", revision.to_string())],
            )?
            .json()?;
        contents.decode()
    }

    /// Fetch the current registry document from the raw content host.
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Http`] or [`GithubError::Status`] when the
    /// document is unreachable.
    pub fn current_document(&self) -> Result<String> {
        Ok(self.get(&self.config.raw_document_url(), &[])?.text()?)
    }

    /// List open pull requests, newest first.
    ///
    /// # Errors
    ///
    /// Fails like [`Self::list_document_commits`].
    pub fn list_open_pulls(&self) -> Result<Vec<PullRequest>> {
        let pulls: Vec<PullRequest> = self
            .get(
                &self.config.pulls_url(),
                &[
                    ("state", "open".to_string()),
                    ("per_page", "100".to_string()),
                ],
            )?
            .json()?;
        tracing::debug!(count = pulls.len(), "listed open pull requests");
        Ok(pulls)
    }

    /// One authenticated GET with status checking.
    fn get(&self, url: &str, query: &[(&str, String)]) -> Result<Response> {
        tracing::debug!(url = %url, "GET");
        let mut request = self.http.get(url).query(query);
        if let Some(token) = &self.config.token {
            request = request.header("Authorization", format!("token {token}"));
        }
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            // GitHub usually explains itself in a JSON body; surface that
            // message when present.
            return Err(match response.json::<ApiErrorBody>() {
                Ok(body) => GithubError::Api {
                    code: status.as_u16(),
                    message: body.message,
                },
                Err(_) => GithubError::Status {
                    code: status.as_u16(),
                    url: url.to_string(),
                },
            });
        }
        Ok(response)
    }
}
