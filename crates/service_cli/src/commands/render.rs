//! Output rendering for reports and sweep results.
//!
//! `table` prints box-drawn tables with five decimals; `json` prints the
//! serialised reports.

use clap::ValueEnum;
use pricer_core::types::Style;
use serde::Serialize;
use std::io::Write;

use super::matrix::{MatrixRow, Variable};
use super::Report;
use crate::Result;

/// Output format for all subcommands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
}

const LABEL_WIDTH: usize = 24;
const VALUE_WIDTH: usize = 14;

/// Writes a single report.
pub fn write_report<W: Write>(out: &mut W, report: &Report, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(out, report),
        OutputFormat::Table => write_report_table(out, report),
    }
}

/// Writes the rows of a parameter sweep.
pub fn write_matrix<W: Write>(
    out: &mut W,
    variable: Variable,
    style: Style,
    rows: &[MatrixRow],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            #[derive(Serialize)]
            struct Sweep<'a> {
                variable: Variable,
                style: Style,
                rows: &'a [MatrixRow],
            }
            write_json(
                out,
                &Sweep {
                    variable,
                    style,
                    rows,
                },
            )
        }
        OutputFormat::Table => write_matrix_table(out, variable, style, rows),
    }
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}

fn write_report_table<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    let rule = |l: &str, m: &str, r: &str| {
        format!(
            "{l}{}{m}{}{r}",
            "─".repeat(LABEL_WIDTH + 2),
            "─".repeat(VALUE_WIDTH + 2)
        )
    };
    let title = format!("{} {}", report.style, report.kind);

    writeln!(out, "{}", rule("┌", "┬", "┐"))?;
    writeln!(out, "│ {:<LABEL_WIDTH$} │ {:>VALUE_WIDTH$} │", title, "")?;
    writeln!(out, "{}", rule("├", "┼", "┤"))?;

    let mut row = |label: &str, value: String| {
        writeln!(out, "│ {:<LABEL_WIDTH$} │ {:>VALUE_WIDTH$} │", label, value)
    };
    row("Option Price", fixed(report.price))?;
    if let Some(std_error) = report.std_error {
        row("Standard Error", fixed(std_error))?;
    }
    if let Some(greeks) = report.greeks {
        row("Delta", fixed(greeks.delta))?;
        row("Gamma", fixed(greeks.gamma))?;
        row("Vega", fixed(greeks.vega))?;
        row("Theta", fixed(greeks.theta))?;
        row("Rho", fixed(greeks.rho))?;
    }
    if let Some(parity) = report.parity {
        let label = format!("Parity {} Price", report.kind.toggled());
        row(&label, fixed(parity.implied_other_price))?;
        let verdict = if parity.parity_holds { "holds" } else { "does not hold" };
        row("Put-Call Parity", verdict.to_string())?;
    }

    writeln!(out, "{}", rule("└", "┴", "┘"))?;
    Ok(())
}

fn write_matrix_table<W: Write>(
    out: &mut W,
    variable: Variable,
    style: Style,
    rows: &[MatrixRow],
) -> Result<()> {
    let mut header = vec![variable.to_string(), "Price".to_string()];
    match style {
        Style::European => {
            header.extend(["Delta", "Gamma", "Vega", "Theta", "Rho", "PCP Price"].map(String::from))
        }
        Style::Asian => header.push("Std Err".to_string()),
        Style::American => {}
    }

    for cell in &header {
        write!(out, "{:>12}", cell)?;
    }
    writeln!(out)?;
    writeln!(out, "{}", "─".repeat(12 * header.len()))?;

    for row in rows {
        write!(out, "{:>12}", fixed(row.value))?;
        match (&row.report, &row.error) {
            (Some(report), _) => {
                write!(out, "{:>12}", fixed(report.price))?;
                if let Some(greeks) = report.greeks {
                    for value in [greeks.delta, greeks.gamma, greeks.vega, greeks.theta, greeks.rho] {
                        write!(out, "{:>12}", fixed(value))?;
                    }
                }
                if let Some(parity) = report.parity {
                    write!(out, "{:>12}", fixed(parity.implied_other_price))?;
                }
                if let Some(std_error) = report.std_error {
                    write!(out, "{:>12}", fixed(std_error))?;
                }
            }
            (None, Some(error)) => write!(out, "  {}", error)?,
            (None, None) => {}
        }
        writeln!(out)?;
    }
    Ok(())
}

fn fixed(value: f64) -> String {
    format!("{:.5}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{execute, Request};
    use pricer_core::types::{OptionKind, OptionParameters};
    use pricer_pricing::mc::SimulationConfig;

    fn european_report() -> Report {
        execute(&Request {
            params: OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08),
            kind: OptionKind::Call,
            style: Style::European,
            simulation: SimulationConfig::new(1_000, 10).unwrap(),
            seed: 1,
        })
        .unwrap()
    }

    fn render(report: &Report, format: OutputFormat) -> String {
        let mut buffer = Vec::new();
        write_report(&mut buffer, report, format).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn test_table_lists_price_greeks_and_parity() {
        let text = render(&european_report(), OutputFormat::Table);
        assert!(text.contains("european call"));
        assert!(text.contains("2.13337"));
        for label in ["Delta", "Gamma", "Vega", "Theta", "Rho"] {
            assert!(text.contains(label), "missing {}", label);
        }
        assert!(text.contains("Parity put Price"));
        assert!(text.contains("5.84628"));
        assert!(text.contains("holds"));
    }

    #[test]
    fn test_json_is_machine_readable() {
        let text = render(&european_report(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["style"], "european");
        assert_eq!(value["kind"], "call");
        assert_eq!(value["parity"]["parity_holds"], true);
        assert!(value["greeks"]["delta"].as_f64().unwrap() > 0.0);
        assert!(value.get("std_error").is_none());
    }
}
