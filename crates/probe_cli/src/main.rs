//! Probe CLI - Sweep, Timing and Self-Check for Probe Search
//!
//! This is the operational entry point for the probe search library.
//!
//! # Commands
//!
//! - `probe sweep` - Probe-count sweep over every distribution, written to CSV
//! - `probe perf` - Wall-clock timing of every algorithm
//! - `probe check` - Verify every algorithm on fixed scenarios and a quick sweep
//!
//! Parameters come from `--config` (default `probe.toml`, optional), then
//! `PROBE_*` environment variables, then command-line flags.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use probe_harness::HarnessConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

/// Probe search sweep and benchmark driver
#[derive(Parser)]
#[command(name = "probe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "probe.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep probe counts and write results.csv and samples.csv
    Sweep {
        /// Output directory for the CSV files
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Largest sequence length
        #[arg(short = 'n', long)]
        max_samples: Option<usize>,

        /// Random keys per (distribution, algorithm, length)
        #[arg(short, long)]
        runs: Option<usize>,

        /// Worker threads (0 = one per CPU)
        #[arg(short, long)]
        workers: Option<usize>,

        /// Base random seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Write a header line to each CSV
        #[arg(long)]
        headers: bool,

        /// Fail if any outcome disagrees with the linear oracle
        #[arg(long)]
        strict: bool,
    },

    /// Time every algorithm over a fixed key set
    Perf {
        /// Keys searched per (algorithm, distribution)
        #[arg(short = 'k', long)]
        searches: Option<usize>,

        /// Sequence length
        #[arg(short = 'n', long)]
        max_samples: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,

        /// Also print one table line per (algorithm, distribution)
        #[arg(short, long)]
        detail: bool,
    },

    /// Verify every algorithm against the linear oracle
    Check,
}

/// Perf output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Pretty-printed JSON
    Json,
}

fn load_config(path: &Path) -> Result<HarnessConfig> {
    let config = HarnessConfig::load_or_default(path)?.with_env_override();
    debug!(?config, "configuration loaded");
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sweep {
            output_dir,
            max_samples,
            runs,
            workers,
            seed,
            headers,
            strict,
        } => {
            let mut config = load_config(&cli.config)?;
            if let Some(output_dir) = output_dir {
                config.output_dir = output_dir;
            }
            if let Some(max_samples) = max_samples {
                config.max_samples = max_samples;
            }
            if let Some(runs) = runs {
                config.runs_per_test = runs;
            }
            if let Some(workers) = workers {
                config.workers = workers;
            }
            if let Some(seed) = seed {
                config.seed = seed;
            }
            config.csv_headers |= headers;
            commands::sweep::run(&config, strict)
        }
        Commands::Perf {
            searches,
            max_samples,
            format,
            detail,
        } => {
            let mut config = load_config(&cli.config)?;
            if let Some(searches) = searches {
                config.perf_searches = searches;
            }
            if let Some(max_samples) = max_samples {
                config.max_samples = max_samples;
            }
            commands::perf::run(&config, format, detail)
        }
        Commands::Check => commands::check::run(),
    }
}
