//! club-scheduler — weekly schedule automation for a project board.
//!
//! # Usage
//!
//! ```text
//! club-scheduler schedule --config scheduler.toml
//! club-scheduler close-out --config scheduler.toml
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use club_scheduler::config::RunConfig;
use club_scheduler::project::{JsonProjectStore, MarkdownReportSink};
use club_scheduler::run;

#[derive(Parser)]
#[command(name = "club-scheduler", about = "Weekly club meeting scheduler", version)]
struct Cli {
    /// Path to the run configuration (TOML). Defaults are used when the
    /// file does not exist.
    #[arg(short, long, default_value = "scheduler.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Calculate the coming cycle's schedule and publish it.
    Schedule,
    /// Move every scheduled club to Closed / Parked.
    CloseOut,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = if cli.config.exists() {
        RunConfig::load(&cli.config)?
    } else {
        info!(path = %cli.config.display(), "no config file, using defaults");
        RunConfig::default()
    };

    let mut store = JsonProjectStore::open(&config.board_path)?;

    match cli.command {
        Command::Schedule => {
            let mut report_sink = MarkdownReportSink::new(&config.report_path)
                .with_marker(config.report_marker.clone());
            let summary =
                run::schedule_cycle(&mut store, &mut report_sink, &config, &mut rand::rng())?;
            store.save()?;
            println!(
                "{} scheduled, {} unscheduled, {} rejected, {} untouched",
                summary.placements.len(),
                summary.unplaced.len(),
                summary.rejected.len(),
                summary.passed_through
            );
        }
        Command::CloseOut => {
            let closed = run::close_out(&mut store)?;
            store.save()?;
            println!("{closed} request(s) closed");
        }
    }

    Ok(())
}
