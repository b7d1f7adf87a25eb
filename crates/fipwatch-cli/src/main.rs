//! fipwatch CLI
//!
//! Command-line interface for FIP registry tracking

use clap::{Parser, Subcommand};
use fipwatch_core::logging;

mod commands;

#[derive(Debug, Parser)]
#[command(name = "fipwatch")]
#[command(about = "FIP registry status tracking", long_about = None)]
struct Cli {
    /// Developer log output (default is quiet JSON logs)
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Build the month-over-month change timeline
    Timeline(commands::timeline::TimelineArgs),
    /// Render the current-state dashboard with open PRs
    Dashboard(commands::dashboard::DashboardArgs),
    /// Export the timeline and status counts as CSV
    Export(commands::export::ExportArgs),
}

fn main() {
    // .env is optional; a missing file is not an error
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::init(if cli.verbose {
        logging::Profile::Development
    } else {
        logging::Profile::Production
    });

    let result = match cli.command {
        Commands::Timeline(args) => commands::timeline::execute(args),
        Commands::Dashboard(args) => commands::dashboard::execute(args),
        Commands::Export(args) => commands::export::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
