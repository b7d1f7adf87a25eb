//! CLI subcommands.

pub mod dashboard;
pub mod export;
pub mod timeline;

use clap::Args;
use fipwatch_github::GithubConfig;
use fipwatch_report::ReportOptions;

/// Repository selection flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct RepoArgs {
    /// GitHub repository holding the registry document
    #[arg(long, default_value = "filecoin-project/FIPs")]
    pub repo: String,

    /// Path of the registry document inside the repository
    #[arg(long, default_value = "README.md")]
    pub doc: String,

    /// Branch the document lives on
    #[arg(long, default_value = "master")]
    pub branch: String,
}

impl RepoArgs {
    /// Acquisition config from the flags plus `GITHUB_TOKEN`.
    pub fn github_config(&self) -> GithubConfig {
        let token = std::env::var("GITHUB_TOKEN")
            .ok()
            .filter(|t| !t.is_empty());
        GithubConfig {
            repo: self.repo.clone(),
            document_path: self.doc.clone(),
            branch: self.branch.clone(),
            token,
            ..GithubConfig::default()
        }
    }

    /// Report options with entry links pointing at the same repository.
    pub fn report_options(&self) -> ReportOptions {
        ReportOptions {
            entry_link: format!(
                "https://github.com/{}/blob/{}/FIPS/fip-{{id}}.md",
                self.repo, self.branch
            ),
            ..ReportOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_flags_map_into_config() {
        let args = RepoArgs {
            repo: "example/registry".to_string(),
            doc: "STATUS.md".to_string(),
            branch: "main".to_string(),
        };
        let config = args.github_config();
        assert_eq!(config.repo, "example/registry");
        assert_eq!(config.document_path, "STATUS.md");
        assert_eq!(config.branch, "main");

        let options = args.report_options();
        assert_eq!(
            options.entry_url("0042"),
            "https://github.com/example/registry/blob/main/FIPS/fip-0042.md"
        );
    }
}
