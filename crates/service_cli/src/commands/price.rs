//! Price command implementation
//!
//! Prices one option from command-line flags.

use std::io::Write;
use tracing::info;

use super::render::{write_report, OutputFormat};
use super::{execute, ContractArgs, MarketArgs, Request, SimulationArgs};
use crate::config::CliConfig;
use crate::Result;

/// Run the price command
pub fn run<W: Write>(
    out: &mut W,
    market: &MarketArgs,
    contract: &ContractArgs,
    simulation: &SimulationArgs,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let (simulation, seed) = simulation.resolve(config)?;
    let request = Request {
        params: market.parameters(),
        kind: contract.kind,
        style: contract.style,
        simulation,
        seed,
    };

    info!("Pricing {} {}...", request.style, request.kind);
    let report = execute(&request)?;
    write_report(out, &report, format)?;

    info!("Pricing complete");
    Ok(())
}
