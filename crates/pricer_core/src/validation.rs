//! Parameter sanity checks run before any pricing formula.
//!
//! [`ParameterValidator`] is the single validation entry point shared by
//! every engine. Checks run in a fixed order and the first failure wins:
//!
//! 1. Any field NaN
//! 2. Any field infinite
//! 3. `S`, `K`, `T`, `σ` not strictly positive (`T` skipped when absent)
//! 4. `r` or `b` outside `[0, 1]`
//!
//! The `[0, 1]` bound on rate and cost of carry excludes negative rates.
//! It is kept as an explicit, narrow restriction; see [`RATE_BOUNDS`].

use crate::types::{OptionParameters, PricingError};

/// Closed interval accepted for rate and cost of carry.
pub const RATE_BOUNDS: (f64, f64) = (0.0, 1.0);

/// Stateless validator for option parameter sets.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_core::validation::ParameterValidator;
///
/// let params = OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08);
/// assert!(ParameterValidator::validate(&params).is_ok());
///
/// let bad = params.with_volatility(0.0);
/// assert!(ParameterValidator::validate(&bad).unwrap_err().is_invalid_parameter());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterValidator;

impl ParameterValidator {
    /// Validates a parameter set.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    #[inline]
    pub fn validate(params: &OptionParameters) -> Result<(), PricingError> {
        Self::validate_values(
            params.spot,
            params.strike,
            params.rate,
            params.maturity,
            params.volatility,
            params.cost_of_carry,
        )
    }

    /// Validates a parameter set and additionally requires a maturity.
    ///
    /// Returns the maturity on success.
    #[inline]
    pub fn validate_with_maturity(params: &OptionParameters) -> Result<f64, PricingError> {
        let maturity = params.require_maturity()?;
        Self::validate(params)?;
        Ok(maturity)
    }

    /// Validates raw values in `(S, K, r, T, σ, b)` order.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn validate_values(
        spot: f64,
        strike: f64,
        rate: f64,
        maturity: Option<f64>,
        volatility: f64,
        cost_of_carry: f64,
    ) -> Result<(), PricingError> {
        let mut fields = vec![("spot", spot), ("strike", strike), ("rate", rate)];
        if let Some(t) = maturity {
            fields.push(("maturity", t));
        }
        fields.push(("volatility", volatility));
        fields.push(("cost_of_carry", cost_of_carry));

        if let Some(&(field, _)) = fields.iter().find(|(_, v)| v.is_nan()) {
            return Err(PricingError::invalid_parameter(field, "is NaN"));
        }

        if let Some(&(field, value)) = fields.iter().find(|(_, v)| v.is_infinite()) {
            return Err(PricingError::invalid_parameter(
                field,
                format!("is infinite ({})", value),
            ));
        }

        let mut positive = vec![("spot", spot), ("strike", strike)];
        if let Some(t) = maturity {
            positive.push(("maturity", t));
        }
        positive.push(("volatility", volatility));

        for (field, value) in positive {
            if value <= 0.0 {
                return Err(PricingError::invalid_parameter(
                    field,
                    format!("must be strictly positive, got {}", value),
                ));
            }
        }

        let (lo, hi) = RATE_BOUNDS;
        for (field, value) in [("rate", rate), ("cost_of_carry", cost_of_carry)] {
            if !(lo..=hi).contains(&value) {
                return Err(PricingError::invalid_parameter(
                    field,
                    format!("must lie in [{}, {}], got {}", lo, hi, value),
                ));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05)
    }

    fn failing_field(params: OptionParameters) -> &'static str {
        match ParameterValidator::validate(&params) {
            Err(PricingError::InvalidParameter { field, .. }) => field,
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_parameters_pass() {
        assert!(ParameterValidator::validate(&base()).is_ok());
    }

    #[test]
    fn test_zero_fields_rejected() {
        assert_eq!(failing_field(base().with_spot(0.0)), "spot");
        assert_eq!(failing_field(base().with_strike(0.0)), "strike");
        assert_eq!(failing_field(base().with_maturity(0.0)), "maturity");
        assert_eq!(failing_field(base().with_volatility(0.0)), "volatility");
    }

    #[test]
    fn test_negative_volatility_rejected() {
        assert_eq!(failing_field(base().with_volatility(-0.2)), "volatility");
    }

    #[test]
    fn test_nan_checked_before_positivity() {
        // Spot is non-positive as well, but NaN is reported first.
        let params = base().with_spot(-1.0).with_rate(f64::NAN);
        assert_eq!(failing_field(params), "rate");
    }

    #[test]
    fn test_infinity_checked_before_positivity() {
        let params = base().with_strike(0.0).with_volatility(f64::INFINITY);
        assert_eq!(failing_field(params), "volatility");
    }

    #[test]
    fn test_nan_and_infinity_in_every_field() {
        for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert_eq!(failing_field(base().with_spot(bad)), "spot");
            assert_eq!(failing_field(base().with_strike(bad)), "strike");
            assert_eq!(failing_field(base().with_rate(bad)), "rate");
            assert_eq!(failing_field(base().with_volatility(bad)), "volatility");
            assert_eq!(failing_field(base().with_maturity(bad)), "maturity");
            assert_eq!(failing_field(base().with_cost_of_carry(bad)), "cost_of_carry");
        }
    }

    #[test]
    fn test_rate_and_carry_bounds() {
        assert_eq!(failing_field(base().with_rate(-0.01)), "rate");
        assert_eq!(failing_field(base().with_rate(1.01)), "rate");
        assert_eq!(failing_field(base().with_cost_of_carry(-0.01)), "cost_of_carry");
        assert_eq!(failing_field(base().with_cost_of_carry(1.5)), "cost_of_carry");

        // Closed interval
        assert!(ParameterValidator::validate(&base().with_rate(0.0)).is_ok());
        assert!(ParameterValidator::validate(&base().with_rate(1.0)).is_ok());
        assert!(ParameterValidator::validate(&base().with_cost_of_carry(0.0)).is_ok());
        assert!(ParameterValidator::validate(&base().with_cost_of_carry(1.0)).is_ok());
    }

    #[test]
    fn test_missing_maturity_skips_maturity_check() {
        let params = base().without_maturity();
        assert!(ParameterValidator::validate(&params).is_ok());
    }

    #[test]
    fn test_validate_with_maturity_requires_it() {
        assert_eq!(ParameterValidator::validate_with_maturity(&base()).unwrap(), 1.0);

        let err = ParameterValidator::validate_with_maturity(&base().without_maturity()).unwrap_err();
        assert!(err.is_invalid_parameter());
    }

    #[test]
    fn test_positivity_order_matches_contract() {
        // S, K, T, σ all invalid: spot is reported.
        let params = OptionParameters::new(0.0, 0.0, 0.05, 0.0, 0.0, 0.05);
        assert_eq!(failing_field(params), "spot");

        // K, T invalid: strike before maturity.
        let params = OptionParameters::new(1.0, 0.0, 0.05, 0.2, 0.0, 0.05);
        assert_eq!(failing_field(params), "strike");
    }
}
