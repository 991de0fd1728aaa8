//! CLI error types.

use pricer_core::types::PricingError;
use pricer_pricing::mc::ConfigError as SimulationError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by `optpricer` subcommands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Malformed or out-of-range command-line or prompt input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Parameter file could not be parsed
    #[error("Failed to parse {path}: {message}")]
    Parse {
        /// File being read
        path: String,
        /// Parser diagnostic
        message: String,
    },

    /// CLI configuration failure
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Simulation settings rejected by the Monte Carlo engine
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),

    /// Pricing failure from the engines
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// JSON rendering failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or file I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
