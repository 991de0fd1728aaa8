//! Error types for the Monte Carlo engine.
//!
//! This module defines structured error types for simulation configuration
//! validation. They convert into [`PricingError`] so engine entry points can
//! propagate them with `?`.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::config::{MAX_PATHS, MAX_STEPS};

/// Configuration error for the Monte Carlo engine.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside valid range [1, MAX_PATHS].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_PATHS)]
    InvalidPathCount(usize),

    /// Step count outside valid range [1, MAX_STEPS].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_STEPS)]
    InvalidStepCount(usize),

    /// Required builder field not supplied.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        let field = match &err {
            ConfigError::InvalidPathCount(_) => "path_count",
            ConfigError::InvalidStepCount(_) => "time_steps",
            ConfigError::InvalidParameter { name, .. } => name,
        };
        PricingError::invalid_parameter(field, err.to_string())
    }
}
