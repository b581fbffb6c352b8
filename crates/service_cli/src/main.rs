//! Viability CLI - Command Line Operations for Automation Investment Analysis
//!
//! This is the operational entry point for the viability engines.
//!
//! # Commands
//!
//! - `viability metrics --input <file>` - Financial-impact assessment
//! - `viability scenarios --input <file>` - Three-scenario comparison
//! - `viability tdabc --input <file>` - Time-driven activity-based costing
//! - `viability simulate --input <file>` - Monte Carlo, risk rating and tornado
//! - `viability check` - Print the effective configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate reads JSON input records and
//! layered configuration, then hands them to the finance, capacity and risk
//! engines.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;

pub use error::{CliError, Result};

use commands::OutputFormat;
use config::{Config, LogLevel, DEFAULT_CONFIG_PATH};

/// Automation investment viability CLI
#[derive(Parser)]
#[command(name = "viability")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path [default: viability.toml]
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assess the financial impact of an automation project
    Metrics {
        /// Path to financial-impact input (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Compare the budget, strategic and enterprise scenarios
    Scenarios {
        /// Path to base project figures (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Run a time-driven activity-based costing analysis
    Tdabc {
        /// Path to resource pool and activities (JSON)
        #[arg(short, long)]
        input: String,
    },

    /// Simulate NPV under uncertainty and rate the risk
    Simulate {
        /// Path to project model and distributions (JSON)
        #[arg(short, long)]
        input: String,

        /// Number of Monte Carlo iterations
        #[arg(short = 'n', long)]
        iterations: Option<usize>,

        /// Master seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Check the effective configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if cli.verbose {
        config.log_level = LogLevel::Debug;
    }
    if let Commands::Simulate {
        iterations, seed, ..
    } = &cli.command
    {
        config.apply_overrides(*iterations, *seed);
    }

    // Initialise tracing; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_filter_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    config.validate()?;
    debug!(?config, "Effective configuration");
    let format: OutputFormat = cli.format.parse()?;

    match cli.command {
        Commands::Metrics { input } => commands::metrics::run(&input, &config.defaults, format),
        Commands::Scenarios { input } => {
            commands::scenarios::run(&input, &config.defaults, format)
        }
        Commands::Tdabc { input } => commands::tdabc::run(&input, format),
        Commands::Simulate { input, .. } => {
            commands::simulate::run(&input, &config.defaults, format)
        }
        Commands::Check => {
            let source = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
            commands::check::run(&config, source, format)
        }
    }
}
