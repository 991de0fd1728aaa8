//! CLI command implementations
//!
//! Each subcommand builds one or more [`Request`]s, runs them through
//! [`execute`] and hands the resulting [`Report`]s to `render`.

pub mod demo;
pub mod file;
pub mod interactive;
pub mod matrix;
pub mod price;
pub mod render;

use clap::Args;
use pricer_core::types::{OptionKind, OptionParameters, Style};
use pricer_models::analytical::Greeks;
use pricer_pricing::mc::SimulationConfig;
use pricer_pricing::rng::PricerRng;
use pricer_pricing::{ParityCheck, PricingFacade};
use serde::Serialize;
use tracing::debug;

use crate::config::CliConfig;
use crate::Result;

/// Market and contract inputs shared by `price`.
#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// Spot price (S)
    #[arg(long, allow_negative_numbers = true)]
    pub spot: f64,

    /// Strike price (K)
    #[arg(long, allow_negative_numbers = true)]
    pub strike: f64,

    /// Risk-free rate (r), annualised
    #[arg(long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Volatility (σ), annualised
    #[arg(long, allow_negative_numbers = true)]
    pub volatility: f64,

    /// Time to maturity in years (ignored by the American engine)
    #[arg(long, allow_negative_numbers = true)]
    pub maturity: Option<f64>,

    /// Cost of carry (b); defaults to the rate
    #[arg(long, allow_negative_numbers = true)]
    pub carry: Option<f64>,
}

impl MarketArgs {
    /// Builds the parameter set.
    pub fn parameters(&self) -> OptionParameters {
        OptionParameters {
            spot: self.spot,
            strike: self.strike,
            rate: self.rate,
            volatility: self.volatility,
            maturity: self.maturity,
            cost_of_carry: self.carry.unwrap_or(self.rate),
        }
    }
}

/// Engine selection.
#[derive(Args, Debug, Clone)]
pub struct ContractArgs {
    /// Option style (european, american, asian)
    #[arg(long, default_value = "european")]
    pub style: Style,

    /// Option kind (call, put)
    #[arg(long, default_value = "call")]
    pub kind: OptionKind,
}

/// Per-request Monte Carlo overrides of the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct SimulationArgs {
    /// Number of Monte Carlo paths
    #[arg(long)]
    pub paths: Option<usize>,

    /// Monitoring dates per path
    #[arg(long)]
    pub steps: Option<usize>,

    /// RNG seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Spread paths over all cores
    #[arg(long)]
    pub parallel: bool,
}

impl SimulationArgs {
    /// Resolves the simulation settings and seed against `config`.
    pub fn resolve(&self, config: &CliConfig) -> Result<(SimulationConfig, u64)> {
        let simulation = config.simulation(self.paths, self.steps, self.parallel)?;
        Ok((simulation, self.seed.unwrap_or(config.seed)))
    }
}

/// A fully specified pricing request.
#[derive(Debug, Clone, Copy)]
pub struct Request {
    /// Market and contract parameters
    pub params: OptionParameters,
    /// Call or put
    pub kind: OptionKind,
    /// Engine selection
    pub style: Style,
    /// Monte Carlo settings (Asian only)
    pub simulation: SimulationConfig,
    /// RNG seed (Asian only)
    pub seed: u64,
}

/// Everything printed for one request.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Engine used
    pub style: Style,
    /// Call or put
    pub kind: OptionKind,
    /// Inputs as priced
    pub parameters: OptionParameters,
    /// Option price
    pub price: f64,
    /// Monte Carlo standard error (Asian)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub std_error: Option<f64>,
    /// Sensitivities (European)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub greeks: Option<Greeks>,
    /// Opposite-kind price via put-call parity (European)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parity: Option<ParityCheck>,
}

/// Prices `request` and gathers the outputs its style supports.
pub fn execute(request: &Request) -> Result<Report> {
    debug!(
        style = %request.style,
        kind = %request.kind,
        seed = request.seed,
        "Executing pricing request"
    );

    let facade = PricingFacade::with_simulation(request.simulation);
    let mut rng = PricerRng::from_seed(request.seed);
    let point = facade.evaluate(&request.params, request.kind, request.style, &mut rng)?;

    let parity = match request.style {
        Style::European => Some(facade.put_call_parity(
            &request.params,
            point.price,
            request.kind,
            request.style,
        )?),
        Style::American | Style::Asian => None,
    };

    Ok(Report {
        style: request.style,
        kind: request.kind,
        parameters: request.params,
        price: point.price,
        std_error: point.std_error,
        greeks: point.greeks,
        parity,
    })
}
