//! Arithmetic-average Asian payoff.
//!
//! The average runs over the monitoring points `path[1..=N]`; the initial
//! spot at `path[0]` is excluded.

use pricer_core::types::OptionKind;

/// Returns the arithmetic mean of `path[1..]`.
///
/// A path with no monitoring points (length ≤ 1) averages to its spot.
#[inline]
pub fn arithmetic_average(path: &[f64]) -> f64 {
    match path.split_first() {
        Some((&spot, [])) => spot,
        Some((_, monitored)) => monitored.iter().sum::<f64>() / monitored.len() as f64,
        None => 0.0,
    }
}

/// Returns `max(0, A − K)` for calls or `max(0, K − A)` for puts.
#[inline]
pub fn asian_payoff(kind: OptionKind, path: &[f64], strike: f64) -> f64 {
    kind.intrinsic(arithmetic_average(path), strike)
}
