//! Swallow Sim CLI - Swallowing Survey Simulation
//!
//! Operational entry point for the swallowing survey simulator.
//!
//! # Commands
//!
//! - `swallow-sim run` - Generate, validate and simulate the full survey
//! - `swallow-sim generate --count <n>` - Print a middle-square sequence
//! - `swallow-sim validate` - Run the chi-square uniformity gate only
//! - `swallow-sim check` - Show the effective configuration
//!
//! # Configuration
//!
//! Settings come from a TOML file (`--config`), then `SWALLOW_*`
//! environment variables, then command-line flags, highest last.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod report;

pub use error::{CliError, Result};

use config::{build_config, CliArgs, ClockMode, OutputFormat};

/// Swallowing survey simulation driven by a middle-square generator
#[derive(Parser)]
#[command(name = "swallow-sim")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Fixed seed instead of the time-derived one
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate, validate and, if uniform, simulate the survey
    Run {
        /// Wait implementation
        #[arg(long, value_enum)]
        clock: Option<ClockMode>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Print a middle-square sequence
    Generate {
        /// Number of values to generate
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },

    /// Run the chi-square uniformity gate on a generated sequence
    Validate {
        /// Number of values (defaults to the number of questions)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Check configuration
    Check,
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (clock, format) = match &cli.command {
        Commands::Run { clock, format } => (*clock, *format),
        Commands::Validate { format, .. } => (None, *format),
        Commands::Generate { .. } | Commands::Check => (None, None),
    };
    let config = build_config(&CliArgs {
        config_file: cli.config.clone(),
        seed: cli.seed,
        clock,
        format,
        log_level: cli.log_level.clone(),
        verbose: cli.verbose,
    })?;

    init_tracing(config.log_level.as_filter_str());
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Run { .. } => commands::run::run(&config),
        Commands::Generate { count } => commands::generate::run(&config, count),
        Commands::Validate { count, .. } => commands::validate::run(&config, count),
        Commands::Check => commands::check::run(&config),
    }
}
