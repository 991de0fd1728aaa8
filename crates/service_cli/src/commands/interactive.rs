//! Interactive command: prompts for each parameter on the terminal.
//!
//! Prompts follow the order style, kind, spot, strike, rate, maturity
//! (skipped for American), volatility, carry and, for Asian options, the
//! path and step counts. Blank simulation answers keep the config values.

use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::info;

use pricer_core::types::{OptionKind, OptionParameters, Style};

use super::render::{write_report, OutputFormat};
use super::{execute, Request};
use crate::config::CliConfig;
use crate::{CliError, Result};

/// Runs the prompt sequence on `input`/`out` and prints the report.
pub fn run<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &CliConfig,
    format: OutputFormat,
) -> Result<()> {
    let request = read_request(input, out, config)?;
    info!("Pricing {} {}...", request.style, request.kind);
    let report = execute(&request)?;
    writeln!(out)?;
    write_report(out, &report, format)
}

fn read_request<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    config: &CliConfig,
) -> Result<Request> {
    let style: Style = ask(input, out, "Option style [1 european, 2 american, 3 asian]")?;
    let kind: OptionKind = ask(input, out, "Call or put [1 call, 2 put]")?;
    let spot = ask(input, out, "Spot price")?;
    let strike = ask(input, out, "Strike price")?;
    let rate = ask(input, out, "Risk-free rate")?;
    let maturity = if style.requires_maturity() {
        Some(ask(input, out, "Maturity (years)")?)
    } else {
        None
    };
    let volatility = ask(input, out, "Volatility")?;
    let cost_of_carry = ask(
        input,
        out,
        "Cost of carry (0 for futures, the rate for stock options)",
    )?;

    let (paths, steps) = if style == Style::Asian {
        (
            ask_optional(input, out, "Number of paths")?,
            ask_optional(input, out, "Number of time steps")?,
        )
    } else {
        (None, None)
    };

    Ok(Request {
        params: OptionParameters {
            spot,
            strike,
            rate,
            volatility,
            maturity,
            cost_of_carry,
        },
        kind,
        style,
        simulation: config.simulation(paths, steps, false)?,
        seed: config.seed,
    })
}

/// Prompts until a line arrives and parses it.
fn ask<R, W, T>(input: &mut R, out: &mut W, label: &str) -> Result<T>
where
    R: BufRead,
    W: Write,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let answer = read_answer(input, out, label)?;
    answer
        .parse()
        .map_err(|e| CliError::InvalidArgument(format!("{}: '{}' ({})", label, answer, e)))
}

/// Like [`ask`], but a blank line yields `None`.
fn ask_optional<R, W, T>(input: &mut R, out: &mut W, label: &str) -> Result<Option<T>>
where
    R: BufRead,
    W: Write,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let answer = read_answer(input, out, &format!("{} (blank for default)", label))?;
    if answer.is_empty() {
        return Ok(None);
    }
    answer
        .parse()
        .map(Some)
        .map_err(|e| CliError::InvalidArgument(format!("{}: '{}' ({})", label, answer, e)))
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<String> {
    write!(out, "{}: ", label)?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::InvalidArgument(format!(
            "{}: unexpected end of input",
            label
        )));
    }
    Ok(line.trim().to_string())
}
