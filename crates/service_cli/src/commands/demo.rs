//! Demo command: prices a fixed textbook contract.
//!
//! S = 60, K = 65, r = 8%, σ = 30%, T = 0.25, b = r, European call.
//! Expected price ≈ 2.1334 with a parity-implied put ≈ 5.8463.

use std::io::Write;
use tracing::info;

use pricer_core::types::{OptionKind, OptionParameters, Style};

use super::render::{write_report, OutputFormat};
use super::{execute, Request};
use crate::config::CliConfig;
use crate::Result;

/// The demo contract.
pub fn demo_request(config: &CliConfig) -> Result<Request> {
    Ok(Request {
        params: OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08),
        kind: OptionKind::Call,
        style: Style::European,
        simulation: config.simulation(None, None, false)?,
        seed: config.seed,
    })
}

/// Runs the demo.
pub fn run<W: Write>(out: &mut W, config: &CliConfig, format: OutputFormat) -> Result<()> {
    info!("Running demo: S=60 K=65 r=0.08 σ=0.30 T=0.25 b=0.08 european call");
    let report = execute(&demo_request(config)?)?;
    write_report(out, &report, format)
}
