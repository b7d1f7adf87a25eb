//! Dashboard command
//!
//! Renders the current registry state plus the open pull requests that
//! reference tracked entries.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use fipwatch_core::{RegistryParser, Snapshot, TableProfile};
use fipwatch_github::{month_key_of, relate_pulls, GithubClient, IdMatcher};
use fipwatch_report::dashboard_page;

use super::RepoArgs;

#[derive(Debug, Args)]
pub struct DashboardArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// Output file path
    #[arg(long, default_value = "fips-dashboard.html")]
    pub out: PathBuf,

    /// Skip the open pull request listing
    #[arg(long)]
    pub skip_pulls: bool,
}

pub fn execute(args: DashboardArgs) -> Result<(), Box<dyn std::error::Error>> {
    let client = GithubClient::new(args.repo.github_config())?;
    let parser = RegistryParser::new(TableProfile::default())?;

    let document = client.current_document()?;
    let entries = parser.parse(&document);
    let now = Utc::now();
    let snapshot = Snapshot::new(month_key_of(now), entries, "HEAD".to_string(), now);

    // A failed PR listing degrades to an empty section
    let pulls = if args.skip_pulls {
        BTreeMap::new()
    } else {
        match client.list_open_pulls() {
            Ok(prs) => {
                let matcher = IdMatcher::new()?;
                relate_pulls(&matcher, &prs)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Pull request listing failed");
                BTreeMap::new()
            }
        }
    };

    let mut options = args.repo.report_options();
    options.title = "FIP Status Dashboard".to_string();
    let html = dashboard_page(&snapshot, &pulls, &options);
    std::fs::write(&args.out, html)?;

    println!("✓ Dashboard written to {}", args.out.display());
    println!("  entries: {}", snapshot.len());
    println!("  entries with open PRs: {}", pulls.len());

    Ok(())
}
