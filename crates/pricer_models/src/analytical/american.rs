//! Perpetual American option approximation.
//!
//! Closed-form quadratic approximation of the American value:
//!
//! - y₁ = ½ − b/σ² + √((b/σ² − ½)² + 2r/σ²)
//! - y₂ = ½ − b/σ² − √((b/σ² − ½)² + 2r/σ²)
//! - **Call**: C = K/(y₁ − 1) · ((y₁ − 1)/y₁ · S/K)^y₁
//! - **Put**: P = K/(1 − y₂) · ((y₂ − 1)/y₂ · S/K)^y₂
//!
//! The formulas carry no maturity term, so they price the *perpetual*
//! option. Maturity on the parameter set is validated if present and
//! otherwise ignored; short-dated American options are overpriced.
//!
//! Optimal exercise boundaries are S* = K·y₁/(y₁ − 1) for the call and
//! S* = K·y₂/(y₂ − 1) for the put. Spots already past the boundary are
//! worth their intrinsic value.

use pricer_core::types::{OptionKind, OptionParameters};
use pricer_core::validation::ParameterValidator;

use super::error::AnalyticalError;

/// |y₁ − 1| at or below which the call takes its `b = r` limit.
pub const DEGENERACY_TOLERANCE: f64 = 1e-10;

/// Perpetual American approximation engine.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, OptionParameters};
/// use pricer_models::analytical::AmericanApproximation;
///
/// let params = OptionParameters::perpetual(100.0, 100.0, 0.05, 0.2, 0.0);
/// let engine = AmericanApproximation::new(&params).unwrap();
///
/// // With zero carry the perpetual call and put coincide at the money
/// let call = engine.price(OptionKind::Call).unwrap();
/// let put = engine.price(OptionKind::Put).unwrap();
/// assert!((call - put).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmericanApproximation {
    spot: f64,
    strike: f64,
    y1: f64,
    y2: f64,
}

impl AmericanApproximation {
    /// Creates an engine, validating the parameters without requiring a maturity.
    ///
    /// # Errors
    /// `AnalyticalError::Invalid` if the validator rejects the parameters.
    pub fn new(params: &OptionParameters) -> Result<Self, AnalyticalError> {
        ParameterValidator::validate(params)?;

        let sigma_sq = params.volatility * params.volatility;
        let carry_ratio = params.cost_of_carry / sigma_sq;
        let root = ((carry_ratio - 0.5).powi(2) + 2.0 * params.rate / sigma_sq).sqrt();

        Ok(Self {
            spot: params.spot,
            strike: params.strike,
            y1: 0.5 - carry_ratio + root,
            y2: 0.5 - carry_ratio - root,
        })
    }

    /// Returns the positive characteristic root y₁.
    #[inline]
    pub fn y1(&self) -> f64 {
        self.y1
    }

    /// Returns the non-positive characteristic root y₂.
    #[inline]
    pub fn y2(&self) -> f64 {
        self.y2
    }

    /// Computes the approximate American price for the given kind.
    pub fn price(&self, kind: OptionKind) -> Result<f64, AnalyticalError> {
        match kind {
            OptionKind::Call => self.price_call(),
            OptionKind::Put => self.price_put(),
        }
    }

    /// Returns the optimal exercise boundary S* for the given kind.
    ///
    /// `None` when no finite boundary exists (the call with y₁ ≤ 1 never
    /// exercises early).
    pub fn exercise_boundary(&self, kind: OptionKind) -> Option<f64> {
        let boundary = match kind {
            OptionKind::Call if self.y1 - 1.0 > DEGENERACY_TOLERANCE => {
                self.strike * self.y1 / (self.y1 - 1.0)
            }
            OptionKind::Call => return None,
            OptionKind::Put => self.strike * self.y2 / (self.y2 - 1.0),
        };
        boundary.is_finite().then_some(boundary)
    }

    /// Computes the call price.
    ///
    /// # Errors
    /// `AnalyticalError::NumericalInstability` when y₁ < 1 (including
    /// y₁ = 0) or the result is not finite.
    pub fn price_call(&self) -> Result<f64, AnalyticalError> {
        let excess = self.y1 - 1.0;
        if excess.abs() <= DEGENERACY_TOLERANCE {
            // b = r: the value tends to the spot as y₁ → 1
            return Ok(self.spot);
        }
        if excess < 0.0 {
            return Err(AnalyticalError::instability(format!(
                "American call undefined for y1 = {} < 1",
                self.y1
            )));
        }

        if let Some(boundary) = self.exercise_boundary(OptionKind::Call) {
            if self.spot >= boundary {
                return Ok(OptionKind::Call.intrinsic(self.spot, self.strike));
            }
        }

        let base = excess / self.y1 * self.spot / self.strike;
        finite("call", self.strike / excess * base.powf(self.y1))
    }

    /// Computes the put price.
    ///
    /// # Errors
    /// `AnalyticalError::NumericalInstability` when y₂ is zero or the
    /// result is not finite.
    pub fn price_put(&self) -> Result<f64, AnalyticalError> {
        if self.y2.abs() <= DEGENERACY_TOLERANCE {
            return Err(AnalyticalError::instability(format!(
                "American put undefined for y2 = {}",
                self.y2
            )));
        }

        if let Some(boundary) = self.exercise_boundary(OptionKind::Put) {
            if self.spot <= boundary {
                return Ok(OptionKind::Put.intrinsic(self.spot, self.strike));
            }
        }

        let base = (self.y2 - 1.0) / self.y2 * self.spot / self.strike;
        finite("put", self.strike / (1.0 - self.y2) * base.powf(self.y2))
    }
}

#[inline]
fn finite(quantity: &str, value: f64) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::instability(format!(
            "American {} is not finite ({})",
            quantity, value
        )))
    }
}
