//! CLI configuration management.
//!
//! Loads defaults for the Monte Carlo engine and logging from a TOML file,
//! then applies `OPTPRICER_*` environment overrides:
//!
//! | Variable | Field |
//! |---|---|
//! | `OPTPRICER_PATHS` | `paths` |
//! | `OPTPRICER_STEPS` | `steps` |
//! | `OPTPRICER_SEED` | `seed` |
//! | `OPTPRICER_PARALLEL` | `parallel` |
//! | `OPTPRICER_LOG_LEVEL` | `log_level` |

use pricer_pricing::mc::{Execution, SimulationConfig, MAX_PATHS, MAX_STEPS};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// CLI configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Default Monte Carlo path count
    #[serde(default = "default_paths")]
    pub paths: usize,

    /// Default monitoring dates per path
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Default RNG seed
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Spread paths over the rayon pool
    #[serde(default)]
    pub parallel: bool,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_paths() -> usize {
    10_000
}

fn default_steps() -> usize {
    252
}

fn default_seed() -> u64 {
    42
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            paths: default_paths(),
            steps: default_steps(),
            seed: default_seed(),
            parallel: false,
            log_level: default_log_level(),
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if it does not exist
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(paths) = lookup("OPTPRICER_PATHS") {
            self.paths = parse_env("OPTPRICER_PATHS", &paths)?;
        }

        if let Some(steps) = lookup("OPTPRICER_STEPS") {
            self.steps = parse_env("OPTPRICER_STEPS", &steps)?;
        }

        if let Some(seed) = lookup("OPTPRICER_SEED") {
            self.seed = parse_env("OPTPRICER_SEED", &seed)?;
        }

        if let Some(parallel) = lookup("OPTPRICER_PARALLEL") {
            self.parallel = match parallel.trim().to_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => true,
                "0" | "false" | "no" | "off" => false,
                _ => {
                    return Err(ConfigError::Env {
                        key: "OPTPRICER_PARALLEL",
                        value: parallel,
                    })
                }
            };
        }

        if let Some(log_level) = lookup("OPTPRICER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        if self.paths == 0 {
            errors.push("paths must be greater than 0".to_string());
        }
        if self.paths > MAX_PATHS {
            errors.push(format!(
                "paths {} exceeds maximum allowed ({})",
                self.paths, MAX_PATHS
            ));
        }

        if self.steps == 0 {
            errors.push("steps must be greater than 0".to_string());
        }
        if self.steps > MAX_STEPS {
            errors.push(format!(
                "steps {} exceeds maximum allowed ({})",
                self.steps, MAX_STEPS
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (if present) with environment overrides and validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }

    /// Execution mode implied by `parallel`.
    pub fn execution(&self) -> Execution {
        if self.parallel {
            Execution::Parallel
        } else {
            Execution::Serial
        }
    }

    /// Simulation settings with optional per-request overrides.
    pub fn simulation(
        &self,
        paths: Option<usize>,
        steps: Option<usize>,
        parallel: bool,
    ) -> Result<SimulationConfig, pricer_pricing::mc::ConfigError> {
        let execution = if parallel {
            Execution::Parallel
        } else {
            self.execution()
        };
        SimulationConfig::builder()
            .path_count(paths.unwrap_or(self.paths))
            .time_steps(steps.unwrap_or(self.steps))
            .execution(execution)
            .build()
    }
}

fn parse_env<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        key,
        value: value.to_string(),
    })
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Environment override that does not parse
    #[error("Invalid value '{value}' for {key}")]
    Env {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn validation_errors(config: &CliConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.paths, 10_000);
        assert_eq!(config.steps, 252);
        assert_eq!(config.seed, 42);
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "paths = 5000\nparallel = true").unwrap();

        let config = CliConfig::load(file.path()).unwrap();
        assert_eq!(config.paths, 5000);
        assert!(config.parallel);
        assert_eq!(config.steps, 252);
        assert_eq!(config.execution(), Execution::Parallel);
    }

    #[test]
    fn test_load_rejects_unknown_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "path_count = 5000").unwrap();

        let err = CliConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = CliConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_env_override() {
        let config = CliConfig::default()
            .with_overrides(lookup(&[
                ("OPTPRICER_PATHS", "2500"),
                ("OPTPRICER_SEED", "7"),
                ("OPTPRICER_PARALLEL", "on"),
                ("OPTPRICER_LOG_LEVEL", "debug"),
            ]))
            .unwrap();
        assert_eq!(config.paths, 2500);
        assert_eq!(config.seed, 7);
        assert!(config.parallel);
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.steps, 252);
    }

    #[test]
    fn test_env_override_rejects_garbage() {
        let err = CliConfig::default()
            .with_overrides(lookup(&[("OPTPRICER_STEPS", "many")]))
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::Env {
                key: "OPTPRICER_STEPS",
                value: "many".to_string()
            }
        );

        let err = CliConfig::default()
            .with_overrides(lookup(&[("OPTPRICER_PARALLEL", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Env { key: "OPTPRICER_PARALLEL", .. }));
    }

    #[test]
    fn test_validate_valid_log_levels() {
        for level in &["trace", "debug", "info", "warn", "error", "INFO"] {
            let mut config = CliConfig::default();
            config.log_level = level.to_string();
            assert!(config.validate().is_ok(), "Log level '{}' should be valid", level);
        }
    }

    #[test]
    fn test_validate_multiple_errors() {
        let config = CliConfig {
            paths: 0,
            steps: MAX_STEPS + 1,
            log_level: "loud".to_string(),
            ..CliConfig::default()
        };
        let errors = validation_errors(&config);
        assert_eq!(errors.len(), 3);
        assert!(errors.iter().any(|e| e.contains("log_level")));
        assert!(errors.iter().any(|e| e.contains("paths")));
        assert!(errors.iter().any(|e| e.contains("exceeds maximum")));
    }

    #[test]
    fn test_simulation_overrides() {
        let config = CliConfig::default();
        let sim = config.simulation(Some(1000), None, true).unwrap();
        assert_eq!(sim.path_count(), 1000);
        assert_eq!(sim.time_steps(), 252);
        assert_eq!(sim.execution(), Execution::Parallel);

        assert!(config.simulation(Some(0), None, false).is_err());
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
