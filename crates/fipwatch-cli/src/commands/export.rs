//! Export command
//!
//! Writes the change timeline and the latest status counts as CSV files
//! for spreadsheets and downstream scripts.

use std::path::{Path, PathBuf};

use clap::Args;
use fipwatch_core::{diff_timeline, RegistryParser, Snapshot, TableProfile, Timeline};
use fipwatch_github::{collect_monthly_snapshots, GithubClient};
use fipwatch_report::{status_counts_csv, timeline_csv};

use super::RepoArgs;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub repo: RepoArgs,

    /// How many months of history to fetch
    #[arg(long, default_value_t = 12)]
    pub months: u32,

    /// Directory the CSV files are written into
    #[arg(long, default_value = ".")]
    pub dir: PathBuf,
}

pub fn execute(args: ExportArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = args.repo.github_config();
    config.history_months = args.months;

    let client = GithubClient::new(config)?;
    let parser = RegistryParser::new(TableProfile::default())?;
    let store = collect_monthly_snapshots(&client, &parser)?;

    let timeline = diff_timeline(&store);
    let latest = store.latest().ok_or("no snapshots collected")?;

    let (timeline_path, counts_path) = write_exports(&args.dir, &timeline, latest)?;
    println!("✓ Exported {}", timeline_path.display());
    println!("✓ Exported {}", counts_path.display());

    Ok(())
}

fn write_exports(
    dir: &Path,
    timeline: &Timeline,
    snapshot: &Snapshot,
) -> std::io::Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir)?;
    let timeline_path = dir.join("fips-timeline.csv");
    let counts_path = dir.join("fips-status-counts.csv");
    std::fs::write(&timeline_path, timeline_csv(timeline))?;
    std::fs::write(&counts_path, status_counts_csv(snapshot))?;
    Ok((timeline_path, counts_path))
}
