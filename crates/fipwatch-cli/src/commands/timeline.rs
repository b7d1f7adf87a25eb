//! Timeline command
//!
//! Collects monthly snapshots, diffs them, and writes the result as
//! HTML, Markdown, or JSON.

use std::path::PathBuf;

use clap::Args;
use fipwatch_core::{diff_timeline, RegistryParser, TableProfile};
use fipwatch_github::{collect_monthly_snapshots, GithubClient};
use fipwatch_report::{timeline_markdown, timeline_page};
use fipwatch_store::SnapshotArchive;

use super::RepoArgs;

#[derive(Debug, Args)]
pub struct TimelineArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// How many months of history to fetch
    #[arg(long, default_value_t = 12)]
    pub months: u32,

    /// Output file path
    #[arg(long, default_value = "fips-timeline.html")]
    pub out: PathBuf,

    /// SQLite archive; collected months are saved there and months the
    /// remote listing no longer reaches are merged back in
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Write a Markdown digest instead of HTML
    #[arg(long, conflicts_with = "json")]
    pub markdown: bool,

    /// Write the structured timeline as JSON instead of HTML
    #[arg(long, conflicts_with = "markdown")]
    pub json: bool,
}

pub fn execute(args: TimelineArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = args.repo.github_config();
    config.history_months = args.months;

    let client = GithubClient::new(config)?;
    let parser = RegistryParser::new(TableProfile::default())?;
    let mut store = collect_monthly_snapshots(&client, &parser)?;

    // Archive what we collected, then backfill older archived months
    if let Some(db_path) = &args.db {
        let archive = SnapshotArchive::open(db_path)?;
        for snapshot in store.snapshots() {
            archive.upsert(snapshot)?;
        }
        let archived = archive.load_store()?;
        let missing: Vec<_> = archived
            .snapshots()
            .filter(|s| store.get(&s.month_key).is_none())
            .cloned()
            .collect();
        for snapshot in missing {
            store.put(snapshot);
        }
    }

    let timeline = diff_timeline(&store);
    let options = args.repo.report_options();

    let rendered = if args.markdown {
        timeline_markdown(&timeline, &options)
    } else if args.json {
        timeline.to_json()?
    } else {
        timeline_page(&timeline, &store, &options)
    };
    std::fs::write(&args.out, rendered)?;

    println!("✓ Timeline written to {}", args.out.display());
    println!("  months: {}", store.len());
    println!("  months with changes: {}", timeline.changes.len());

    Ok(())
}
