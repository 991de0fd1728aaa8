//! Discrete geometric-average Asian option pricing.
//!
//! The geometric mean of lognormal prices is lognormal, so an option on
//! the geometric average over `N` equally spaced monitoring dates has a
//! Black-Scholes-style closed form. Because `G ≤ A` pathwise, the
//! geometric call is a lower bound for the arithmetic call and the
//! geometric put an upper bound for the arithmetic put; the Monte Carlo
//! tests use it as that bracket.
//!
//! # Mathematical Background
//!
//! With monitoring at `t_i = iT/N`, `i = 1..N`, `ln G` is normal with
//!
//! ```text
//! μ = ln S + (r − σ²/2)·T·(N + 1)/(2N)
//! v = σ²·T·(N + 1)(2N + 1)/(6N²)
//! ```
//!
//! and
//!
//! ```text
//! d₁ = (μ − ln K + v)/√v,  d₂ = d₁ − √v
//! C = e^{−rT}·(e^{μ + v/2}·N(d₁) − K·N(d₂))
//! P = e^{−rT}·(K·N(−d₂) − e^{μ + v/2}·N(−d₁))
//! ```
//!
//! As `N → ∞` this tends to the continuous Kemna-Vorst price with
//! `σ_G = σ/√3`.
//!
//! # References
//!
//! - Kemna, A.G.Z. and Vorst, A.C.F. (1990). "A Pricing Method for Options
//!   Based on Average Asset Values." Journal of Banking and Finance, 14, 113-129.

use pricer_core::types::{OptionKind, OptionParameters, PricingError};
use pricer_core::validation::ParameterValidator;
use pricer_models::analytical::norm_cdf;

/// Closed-form price of a discretely monitored geometric-average Asian option.
///
/// The underlying drifts at the risk-free rate, matching the Monte Carlo
/// path simulator.
///
/// # Errors
///
/// - `PricingError::InvalidParameter` if validation fails, maturity is absent,
///   or `monitoring_points` is zero
/// - `PricingError::NumericalInstability` if the result is not finite
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, OptionParameters};
/// use pricer_pricing::analytical::geometric_asian;
///
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05);
/// let call = geometric_asian(&params, OptionKind::Call, 50).unwrap();
/// assert!((call - 5.641).abs() < 1e-3);
/// ```
pub fn geometric_asian(
    params: &OptionParameters,
    kind: OptionKind,
    monitoring_points: usize,
) -> Result<f64, PricingError> {
    let maturity = ParameterValidator::validate_with_maturity(params)?;
    if monitoring_points == 0 {
        return Err(PricingError::invalid_parameter(
            "time_steps",
            "must be at least 1",
        ));
    }

    let n = monitoring_points as f64;
    let sigma_sq = params.volatility * params.volatility;
    let mu = params.spot.ln() + (params.rate - 0.5 * sigma_sq) * maturity * (n + 1.0) / (2.0 * n);
    let v = sigma_sq * maturity * (n + 1.0) * (2.0 * n + 1.0) / (6.0 * n * n);
    let sqrt_v = v.sqrt();

    let d1 = (mu - params.strike.ln() + v) / sqrt_v;
    let d2 = d1 - sqrt_v;
    let forward = (mu + 0.5 * v).exp();
    let discount = (-params.rate * maturity).exp();

    let price = match kind {
        OptionKind::Call => discount * (forward * norm_cdf(d1) - params.strike * norm_cdf(d2)),
        OptionKind::Put => discount * (params.strike * norm_cdf(-d2) - forward * norm_cdf(-d1)),
    };

    if price.is_finite() {
        Ok(price)
    } else {
        Err(PricingError::instability(format!(
            "geometric Asian price is not finite ({})",
            price
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_models::analytical::BlackScholes;

    fn atm() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05)
    }

    #[test]
    fn test_reference_values() {
        assert_relative_eq!(
            geometric_asian(&atm(), OptionKind::Call, 50).unwrap(),
            5.641_058,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            geometric_asian(&atm(), OptionKind::Put, 50).unwrap(),
            3.508_826,
            epsilon = 1e-5
        );
        assert_relative_eq!(
            geometric_asian(&atm(), OptionKind::Call, 12).unwrap(),
            5.940_2,
            epsilon = 1e-4
        );
    }

    #[test]
    fn test_single_monitoring_point_is_european() {
        // N = 1 averages only S_T
        let european = BlackScholes::new(&atm()).unwrap().price_call().unwrap();
        let geometric = geometric_asian(&atm(), OptionKind::Call, 1).unwrap();
        assert_relative_eq!(geometric, european, epsilon = 1e-10);
    }

    #[test]
    fn test_converges_to_kemna_vorst() {
        // Continuous limit: b_G = (r − σ²/6)/2, σ_G = σ/√3
        let (s, k, r, vol, t) = (100.0_f64, 100.0_f64, 0.05_f64, 0.2_f64, 1.0_f64);
        let sigma_g = vol / 3.0_f64.sqrt();
        let b_g = 0.5 * (r - vol * vol / 6.0);
        let params = OptionParameters::new(s, k, r, sigma_g, t, b_g);
        let continuous = BlackScholes::new(&params).unwrap().price_call().unwrap();

        let discrete = geometric_asian(&atm(), OptionKind::Call, 10_000).unwrap();
        assert_relative_eq!(discrete, continuous, epsilon = 1e-3);
    }

    #[test]
    fn test_zero_monitoring_points_rejected() {
        let err = geometric_asian(&atm(), OptionKind::Call, 0).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let err = geometric_asian(&atm().with_spot(-1.0), OptionKind::Put, 10).unwrap_err();
        assert!(err.is_invalid_parameter());
    }
}
