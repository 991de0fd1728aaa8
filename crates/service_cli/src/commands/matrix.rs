//! Matrix command: sweeps one parameter and prices each point.
//!
//! Parameters not being swept default to S = 110, K = 100, r = 10%,
//! σ = 10%, T = 1, b = 2%. Points that fail to price are reported with
//! their error instead of aborting the sweep.

use clap::{Args, ValueEnum};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tracing::{info, warn};

use pricer_core::types::OptionParameters;

use super::render::{write_matrix, OutputFormat};
use super::{execute, ContractArgs, Report, Request, SimulationArgs};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Upper bound on rows in one sweep.
pub const MAX_POINTS: usize = 10_000;

/// Parameter being varied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variable {
    /// Spot price
    Spot,
    /// Strike price
    Strike,
    /// Risk-free rate
    Rate,
    /// Volatility
    Volatility,
    /// Time to maturity
    Maturity,
    /// Cost of carry
    Carry,
}

impl Variable {
    /// Returns `params` with this variable set to `value`.
    pub fn apply(self, params: OptionParameters, value: f64) -> OptionParameters {
        match self {
            Self::Spot => params.with_spot(value),
            Self::Strike => params.with_strike(value),
            Self::Rate => params.with_rate(value),
            Self::Volatility => params.with_volatility(value),
            Self::Maturity => params.with_maturity(value),
            Self::Carry => params.with_cost_of_carry(value),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Spot => "spot",
            Self::Strike => "strike",
            Self::Rate => "rate",
            Self::Volatility => "volatility",
            Self::Maturity => "maturity",
            Self::Carry => "carry",
        };
        f.write_str(name)
    }
}

/// Arguments of the matrix command.
#[derive(Args, Debug, Clone)]
pub struct MatrixArgs {
    /// Parameter to sweep
    #[arg(long, value_enum)]
    pub vary: Variable,

    /// First value of the sweep
    #[arg(long, allow_negative_numbers = true)]
    pub begin: f64,

    /// Last value of the sweep (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub end: f64,

    /// Increment between values
    #[arg(long)]
    pub step: f64,

    /// Spot price
    #[arg(long, default_value_t = 110.0)]
    pub spot: f64,

    /// Strike price
    #[arg(long, default_value_t = 100.0)]
    pub strike: f64,

    /// Risk-free rate
    #[arg(long, default_value_t = 0.1)]
    pub rate: f64,

    /// Volatility
    #[arg(long, default_value_t = 0.1)]
    pub volatility: f64,

    /// Time to maturity in years
    #[arg(long, default_value_t = 1.0)]
    pub maturity: f64,

    /// Cost of carry
    #[arg(long, default_value_t = 0.02, allow_negative_numbers = true)]
    pub carry: f64,

    #[command(flatten)]
    pub contract: ContractArgs,

    #[command(flatten)]
    pub simulation: SimulationArgs,
}

impl MatrixArgs {
    fn base(&self) -> OptionParameters {
        OptionParameters::new(
            self.spot,
            self.strike,
            self.rate,
            self.volatility,
            self.maturity,
            self.carry,
        )
    }
}

/// One sweep point.
#[derive(Debug, Clone, Serialize)]
pub struct MatrixRow {
    /// Value of the swept variable
    pub value: f64,
    /// Pricing outputs, if the point priced
    #[serde(flatten)]
    pub report: Option<Report>,
    /// Failure message otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Returns `begin, begin + step, ...` up to and including `end`.
pub fn sweep_values(begin: f64, end: f64, step: f64) -> Result<Vec<f64>> {
    if !(begin.is_finite() && end.is_finite()) || end < begin {
        return Err(CliError::InvalidArgument(format!(
            "sweep range [{}, {}] must be finite with begin <= end",
            begin, end
        )));
    }
    if !(step.is_finite() && step > 0.0) {
        return Err(CliError::InvalidArgument(format!(
            "step must be positive, got {}",
            step
        )));
    }

    // Tolerance keeps `end` when (end - begin) / step is a whole number.
    let intervals = ((end - begin) / step + 1e-9).floor();
    if intervals >= MAX_POINTS as f64 {
        return Err(CliError::InvalidArgument(format!(
            "sweep of {} points exceeds maximum allowed ({})",
            intervals + 1.0,
            MAX_POINTS
        )));
    }

    Ok((0..=intervals as usize)
        .map(|i| begin + i as f64 * step)
        .collect())
}

/// Prices every sweep point.
pub fn sweep(args: &MatrixArgs, config: &CliConfig) -> Result<Vec<MatrixRow>> {
    let values = sweep_values(args.begin, args.end, args.step)?;
    let (simulation, seed) = args.simulation.resolve(config)?;
    let base = args.base();

    info!(
        "Sweeping {} over {} points ({} {})",
        args.vary,
        values.len(),
        args.contract.style,
        args.contract.kind
    );

    let rows = values
        .into_iter()
        .map(|value| {
            let request = Request {
                params: args.vary.apply(base, value),
                kind: args.contract.kind,
                style: args.contract.style,
                simulation,
                seed,
            };
            match execute(&request) {
                Ok(report) => MatrixRow {
                    value,
                    report: Some(report),
                    error: None,
                },
                Err(e) => {
                    warn!("{} = {} failed: {}", args.vary, value, e);
                    MatrixRow {
                        value,
                        report: None,
                        error: Some(e.to_string()),
                    }
                }
            }
        })
        .collect();

    Ok(rows)
}

/// Run the matrix command
pub fn run<W: Write>(
    out: &mut W,
    args: &MatrixArgs,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let rows = sweep(args, config)?;
    write_matrix(out, args.vary, args.contract.style, &rows, format)
}
