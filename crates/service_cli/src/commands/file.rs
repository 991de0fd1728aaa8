//! File command implementation
//!
//! Reads one option from a TOML parameter file:
//!
//! ```toml
//! spot = 60.0
//! strike = 65.0
//! rate = 0.08
//! volatility = 0.30
//! maturity = 0.25
//! carry = 0.08        # optional, defaults to rate
//! style = "european"  # european | american | asian
//! kind = "call"       # call | put
//! paths = 10000       # optional, Asian only
//! steps = 252         # optional, Asian only
//! seed = 42           # optional
//! ```

use serde::Deserialize;
use std::io::Write;
use std::path::Path;
use tracing::info;

use pricer_core::types::{OptionKind, OptionParameters, Style};

use super::render::{write_report, OutputFormat};
use super::{execute, Request};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// On-disk parameter file layout.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ParameterFile {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
    /// Time to maturity in years
    pub maturity: Option<f64>,
    /// Cost of carry
    #[serde(alias = "cost_of_carry")]
    pub carry: Option<f64>,
    /// Option style
    #[serde(default = "default_style")]
    pub style: Style,
    /// Option kind
    #[serde(default = "default_kind")]
    pub kind: OptionKind,
    /// Monte Carlo path count
    pub paths: Option<usize>,
    /// Monitoring dates per path
    pub steps: Option<usize>,
    /// RNG seed
    pub seed: Option<u64>,
    /// Spread paths over all cores
    #[serde(default)]
    pub parallel: bool,
}

fn default_style() -> Style {
    Style::European
}

fn default_kind() -> OptionKind {
    OptionKind::Call
}

impl ParameterFile {
    /// Reads and parses `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Builds the request, filling simulation gaps from `config`.
    pub fn request(&self, config: &CliConfig) -> Result<Request> {
        Ok(Request {
            params: OptionParameters {
                spot: self.spot,
                strike: self.strike,
                rate: self.rate,
                volatility: self.volatility,
                maturity: self.maturity,
                cost_of_carry: self.carry.unwrap_or(self.rate),
            },
            kind: self.kind,
            style: self.style,
            simulation: config.simulation(self.paths, self.steps, self.parallel)?,
            seed: self.seed.unwrap_or(config.seed),
        })
    }
}

/// Run the file command
pub fn run<W: Write>(
    out: &mut W,
    path: &Path,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    info!("Reading parameters from {}", path.display());
    let file = ParameterFile::load(path)?;
    let report = execute(&file.request(config)?)?;
    write_report(out, &report, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn write_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    fn run_json(content: &str) -> Result<serde_json::Value> {
        let file = write_file(content);
        let mut out = Vec::new();
        run(&mut out, file.path(), &CliConfig::default(), OutputFormat::Json)?;
        Ok(serde_json::from_slice(&out)?)
    }

    #[test]
    fn test_european_file() {
        let value = run_json(
            "spot = 60.0\nstrike = 65.0\nrate = 0.08\nvolatility = 0.30\nmaturity = 0.25\n",
        )
        .unwrap();
        assert!((value["price"].as_f64().unwrap() - 2.1334).abs() < 1e-3);
        assert_eq!(value["parity"]["parity_holds"], true);
    }

    #[test]
    fn test_american_file_without_maturity() {
        let value = run_json(
            "spot = 110.0\nstrike = 100.0\nrate = 0.1\nvolatility = 0.1\n\
             cost_of_carry = 0.02\nstyle = \"american\"\nkind = \"put\"\n",
        )
        .unwrap();
        assert!((value["price"].as_f64().unwrap() - 3.03106).abs() < 1e-4);
        assert!(value.get("greeks").is_none());
    }

    #[test]
    fn test_asian_file_reads_simulation_settings() {
        let content = "spot = 100.0\nstrike = 100.0\nrate = 0.05\nvolatility = 0.2\n\
                       maturity = 1.0\nstyle = \"asian\"\npaths = 2000\nsteps = 10\nseed = 3\n";
        let file = write_file(content);
        let parsed = ParameterFile::load(file.path()).unwrap();
        let request = parsed.request(&CliConfig::default()).unwrap();
        assert_eq!(request.simulation.path_count(), 2000);
        assert_eq!(request.simulation.time_steps(), 10);
        assert_eq!(request.seed, 3);

        let value = run_json(content).unwrap();
        assert!(value["std_error"].as_f64().unwrap() > 0.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut out = Vec::new();
        let err = run(
            &mut out,
            &dir.path().join("nope.toml"),
            &CliConfig::default(),
            OutputFormat::Table,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_unknown_key_is_parse_error() {
        let err = run_json("spot = 1.0\nstrike = 1.0\nrate = 0.0\nvolatility = 0.1\nnSimulations = 5\n")
            .unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
    }

    #[test]
    fn test_european_without_maturity_is_invalid() {
        let err = run_json("spot = 1.0\nstrike = 1.0\nrate = 0.0\nvolatility = 0.1\n").unwrap_err();
        assert!(matches!(err, CliError::Pricing(ref e) if e.is_invalid_parameter()));
    }
}
