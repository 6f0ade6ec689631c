//! StudyTrack CLI - study progress reports from plan files.

mod plan;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use studytrack_core::format_percent;
use studytrack_progress::{ProgressReport, ReportConfig, StrategyKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::plan::TrackPlan;

#[derive(Parser)]
#[command(name = "studytrack")]
#[command(about = "Study track progress reports", long_about = None)]
struct Cli {
    /// Log at debug level
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the progress of a plan
    Report {
        /// Plan file (JSON)
        plan: PathBuf,
        /// Aggregation strategy for the track total
        #[arg(long, value_enum, default_value = "simple")]
        strategy: StrategyArg,
        /// Include one line per task
        #[arg(long)]
        tasks: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the track total under every strategy
    Compare {
        /// Plan file (JSON)
        plan: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    /// Plain mean of course progress
    Simple,
    /// Mean weighted by course duration
    Weighted,
}

impl From<StrategyArg> for StrategyKind {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Simple => StrategyKind::Simple,
            StrategyArg::Weighted => StrategyKind::Weighted,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Report { plan, strategy, tasks, json } => {
            let track = TrackPlan::load(&plan)?.build()?;
            info!("Loaded {}", track);

            let config = ReportConfig::default()
                .with_strategy(strategy.into())
                .with_tasks(tasks);
            let report = ProgressReport::build(&track, config);

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.render());
            }
        }
        Commands::Compare { plan } => {
            let track = TrackPlan::load(&plan)?.build()?;
            info!("Loaded {}", track);

            println!("{}", track.name());
            for kind in StrategyKind::ALL {
                let report = ProgressReport::build(&track, ReportConfig::default().with_strategy(kind));
                println!("  {:<24} {}", report.strategy_name(), format_percent(report.progress));
            }
        }
    }

    Ok(())
}
