//! Put-call parity for European options.
//!
//! C + K·e^(−rT) = P + S
//!
//! The relation is stated with the spot `S` rather than the carry-adjusted
//! forward, so it is exact for `b = r`. For other carries it is a
//! consistency check that tolerates the [`PARITY_TOLERANCE`] gap.

use pricer_core::types::{OptionKind, OptionParameters};
use pricer_core::validation::ParameterValidator;

use super::error::AnalyticalError;

/// Absolute tolerance for [`parity_holds`].
pub const PARITY_TOLERANCE: f64 = 0.01;

/// The two parity legs `S` and `K·e^(−rT)` of a validated parameter set.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParityLegs {
    spot: f64,
    discounted_strike: f64,
}

impl ParityLegs {
    /// Validates `params` and computes the legs.
    pub fn new(params: &OptionParameters) -> Result<Self, AnalyticalError> {
        let maturity = params.maturity.ok_or(AnalyticalError::MissingMaturity {
            engine: "put-call parity",
        })?;
        ParameterValidator::validate(params)?;
        Ok(Self::from_validated(params.spot, params.strike, params.rate, maturity))
    }

    /// Builds the legs from inputs the caller has already validated.
    pub(crate) fn from_validated(spot: f64, strike: f64, rate: f64, maturity: f64) -> Self {
        Self {
            spot,
            discounted_strike: strike * (-rate * maturity).exp(),
        }
    }

    /// `P + S − K·e^(−rT)`
    #[inline]
    pub fn call_from_put(&self, put_price: f64) -> f64 {
        put_price + self.spot - self.discounted_strike
    }

    /// `C + K·e^(−rT) − S`
    #[inline]
    pub fn put_from_call(&self, call_price: f64) -> f64 {
        call_price + self.discounted_strike - self.spot
    }

    /// Price of the opposite kind implied by `known_price` of `known_kind`.
    #[inline]
    pub fn implied_price(&self, known_price: f64, known_kind: OptionKind) -> f64 {
        match known_kind {
            OptionKind::Call => self.put_from_call(known_price),
            OptionKind::Put => self.call_from_put(known_price),
        }
    }

    /// True when `|C + K·e^(−rT) − (P + S)| < 0.01`.
    #[inline]
    pub fn holds(&self, call_price: f64, put_price: f64) -> bool {
        ((call_price + self.discounted_strike) - (put_price + self.spot)).abs() < PARITY_TOLERANCE
    }
}

/// Returns the call price implied by a put price: `P + S − K·e^(−rT)`.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
/// use pricer_models::analytical::parity::call_from_put;
///
/// let params = OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08);
/// let call = call_from_put(&params, 5.8463).unwrap();
/// assert!((call - 2.1334).abs() < 1e-3);
/// ```
pub fn call_from_put(params: &OptionParameters, put_price: f64) -> Result<f64, AnalyticalError> {
    Ok(ParityLegs::new(params)?.call_from_put(put_price))
}

/// Returns the put price implied by a call price: `C + K·e^(−rT) − S`.
pub fn put_from_call(params: &OptionParameters, call_price: f64) -> Result<f64, AnalyticalError> {
    Ok(ParityLegs::new(params)?.put_from_call(call_price))
}

/// Returns the price of the opposite kind implied by `known_price`.
///
/// `known_kind` is the kind `known_price` belongs to.
pub fn implied_price(
    params: &OptionParameters,
    known_price: f64,
    known_kind: OptionKind,
) -> Result<f64, AnalyticalError> {
    Ok(ParityLegs::new(params)?.implied_price(known_price, known_kind))
}

/// Returns true when `|C + K·e^(−rT) − (P + S)| < 0.01`.
pub fn parity_holds(
    params: &OptionParameters,
    call_price: f64,
    put_price: f64,
) -> Result<bool, AnalyticalError> {
    Ok(ParityLegs::new(params)?.holds(call_price, put_price))
}
