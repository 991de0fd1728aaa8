//! optpricer CLI - Command Line Front-ends for Option Pricing
//!
//! # Commands
//!
//! - `optpricer price --spot .. --strike ..` - Price one option from flags
//! - `optpricer interactive` - Prompt for each parameter on the terminal
//! - `optpricer file <path>` - Price the option described by a TOML file
//! - `optpricer demo` - Price the textbook S=60, K=65 European call
//! - `optpricer matrix --vary spot ..` - Sweep one parameter
//!
//! # Configuration
//!
//! Monte Carlo defaults and the log level come from `optpricer.toml` (if
//! present) with `OPTPRICER_*` environment overrides. `RUST_LOG` takes
//! precedence over the configured log level; `--verbose` forces `debug`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use commands::matrix::MatrixArgs;
use commands::render::OutputFormat;
use commands::{ContractArgs, MarketArgs, SimulationArgs};
use config::CliConfig;

/// European, American and Asian option pricer
#[derive(Parser)]
#[command(name = "optpricer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "optpricer.toml")]
    config: PathBuf,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price one option from command-line flags
    Price {
        #[command(flatten)]
        market: MarketArgs,

        #[command(flatten)]
        contract: ContractArgs,

        #[command(flatten)]
        simulation: SimulationArgs,
    },

    /// Prompt for the parameters on the terminal
    Interactive,

    /// Price the option described by a TOML parameter file
    File {
        /// Path to the parameter file
        path: PathBuf,
    },

    /// Price the built-in demonstration contract
    Demo,

    /// Sweep one parameter and price each point
    Matrix(MatrixArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = CliConfig::load_with_env_and_validate(&cli.config)
        .with_context(|| format!("Failed to load configuration from {}", cli.config.display()))?;

    init_tracing(&config, cli.verbose);
    debug!(?config, "Configuration loaded");
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Price {
            market,
            contract,
            simulation,
        } => commands::price::run(&mut out, &market, &contract, &simulation, &config, cli.format),
        Commands::Interactive => {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            commands::interactive::run(&mut input, &mut out, &config, cli.format)
        }
        Commands::File { path } => commands::file::run(&mut out, &path, &config, cli.format),
        Commands::Demo => commands::demo::run(&mut out, &config, cli.format),
        Commands::Matrix(args) => commands::matrix::run(&mut out, &args, &config, cli.format),
    }?;

    Ok(())
}

/// Installs the global subscriber. Logs go to stderr so JSON on stdout
/// stays parseable.
fn init_tracing(config: &CliConfig, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}
