//! Monte Carlo simulation configuration.
//!
//! This module provides [`SimulationConfig`] and its builder. The
//! configuration holds cost and accuracy knobs only; the random source is
//! owned by the caller and passed separately.

use super::error::ConfigError;

/// Maximum number of simulation paths allowed.
pub const MAX_PATHS: usize = 10_000_000;

/// Maximum number of time steps allowed per path.
pub const MAX_STEPS: usize = 10_000;

/// How the engine distributes paths.
///
/// - `Serial`: one stream, paths drawn in sequence on the calling thread
/// - `Parallel`: path `i` draws from sub-stream `i` on a rayon worker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Execution {
    /// Single-threaded.
    #[default]
    Serial,
    /// Rayon data-parallel over paths.
    Parallel,
}

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying path count `M` and time steps `N`.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{Execution, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .path_count(10_000)
///     .time_steps(50)
///     .execution(Execution::Parallel)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.path_count(), 10_000);
/// assert_eq!(config.time_steps(), 50);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationConfig {
    /// Number of simulation paths (M).
    path_count: usize,
    /// Number of time steps per path (N).
    time_steps: usize,
    /// Serial or parallel path generation.
    execution: Execution,
}

impl SimulationConfig {
    /// Creates a serial configuration, validating both counts.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if either count is out of range.
    pub fn new(path_count: usize, time_steps: usize) -> Result<Self, ConfigError> {
        Self::builder()
            .path_count(path_count)
            .time_steps(time_steps)
            .build()
    }

    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulation paths.
    #[inline]
    pub fn path_count(&self) -> usize {
        self.path_count
    }

    /// Returns the number of time steps per path.
    #[inline]
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Returns the execution mode.
    #[inline]
    pub fn execution(&self) -> Execution {
        self.execution
    }

    /// Returns a copy with a different execution mode.
    #[inline]
    pub fn with_execution(self, execution: Execution) -> Self {
        Self { execution, ..self }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `path_count` is 0 or greater than 10,000,000
    /// - `time_steps` is 0 or greater than 10,000
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.path_count == 0 || self.path_count > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.path_count));
        }
        if self.time_steps == 0 || self.time_steps > MAX_STEPS {
            return Err(ConfigError::InvalidStepCount(self.time_steps));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .path_count(50_000)
///     .time_steps(252)  // Daily steps for 1 year
///     .build()
///     .expect("valid config");
/// ```
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    path_count: Option<usize>,
    time_steps: Option<usize>,
    execution: Execution,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulation paths, in [1, 10_000_000].
    #[inline]
    pub fn path_count(mut self, path_count: usize) -> Self {
        self.path_count = Some(path_count);
        self
    }

    /// Sets the number of time steps per path, in [1, 10_000].
    #[inline]
    pub fn time_steps(mut self, time_steps: usize) -> Self {
        self.time_steps = Some(time_steps);
        self
    }

    /// Sets the execution mode.
    #[inline]
    pub fn execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `path_count` not set or invalid
    /// - `time_steps` not set or invalid
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let path_count = self.path_count.ok_or(ConfigError::InvalidParameter {
            name: "path_count",
            value: "must be specified".to_string(),
        })?;

        let time_steps = self.time_steps.ok_or(ConfigError::InvalidParameter {
            name: "time_steps",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            path_count,
            time_steps,
            execution: self.execution,
        };

        config.validate()?;
        Ok(config)
    }
}
