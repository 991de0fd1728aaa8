//! Option contract and market parameter types.
//!
//! This module provides:
//! - [`OptionKind`]: Call or put
//! - [`Style`]: European, American, or Asian
//! - [`OptionParameters`]: Immutable parameter set consumed by every engine
//!
//! No type here carries mutable pricing state. Switching between a call and
//! a put is done by the caller choosing a different [`OptionKind`], never by
//! mutating an option object.

use std::fmt;
use std::str::FromStr;

use super::error::PricingError;

/// Call or put.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionKind;
///
/// let kind: OptionKind = "put".parse().unwrap();
/// assert_eq!(kind, OptionKind::Put);
/// assert_eq!(kind.toggled(), OptionKind::Call);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionKind {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionKind {
    /// Returns the opposite kind.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            Self::Call => Self::Put,
            Self::Put => Self::Call,
        }
    }

    /// Returns the intrinsic value `max(S − K, 0)` or `max(K − S, 0)`.
    #[inline]
    pub fn intrinsic(self, underlying: f64, strike: f64) -> f64 {
        match self {
            Self::Call => (underlying - strike).max(0.0),
            Self::Put => (strike - underlying).max(0.0),
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Call => write!(f, "call"),
            Self::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionKind {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "call" | "c" | "1" => Ok(Self::Call),
            "put" | "p" | "2" => Ok(Self::Put),
            other => Err(PricingError::domain(format!(
                "Unknown option kind '{}'. Supported: call, put",
                other
            ))),
        }
    }
}

/// Exercise/averaging style selecting the pricing engine.
///
/// - `European`: closed-form Black-Scholes
/// - `American`: perpetual quadratic approximation
/// - `Asian`: arithmetic-average Monte Carlo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Style {
    /// Exercisable at maturity only.
    European,
    /// Exercisable at any time.
    American,
    /// Payoff on the arithmetic average of the path.
    Asian,
}

impl Style {
    /// Returns true if the engine for this style needs a maturity.
    #[inline]
    pub fn requires_maturity(self) -> bool {
        !matches!(self, Self::American)
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::European => write!(f, "european"),
            Self::American => write!(f, "american"),
            Self::Asian => write!(f, "asian"),
        }
    }
}

impl FromStr for Style {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "european" | "euro" | "1" => Ok(Self::European),
            "american" | "amer" | "2" => Ok(Self::American),
            "asian" | "3" => Ok(Self::Asian),
            other => Err(PricingError::domain(format!(
                "Unknown option style '{}'. Supported: european, american, asian",
                other
            ))),
        }
    }
}

/// Market and contract parameters for a single pricing request.
///
/// Immutable value object. `maturity` is `None` for parameter sets that
/// omit it (the perpetual American approximation); maturity-dependent
/// engines call [`OptionParameters::require_maturity`].
///
/// The `with_*` methods return a modified copy; they are how parameter
/// sweeps and finite-difference bumps derive neighbouring points.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionParameters;
///
/// let params = OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08);
/// assert_eq!(params.maturity, Some(0.25));
///
/// let bumped = params.with_spot(61.0);
/// assert_eq!(bumped.spot, 61.0);
/// assert_eq!(params.spot, 60.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionParameters {
    /// Spot price (S)
    pub spot: f64,
    /// Strike price (K)
    pub strike: f64,
    /// Risk-free rate (r), annualised
    pub rate: f64,
    /// Volatility (σ), annualised
    pub volatility: f64,
    /// Time to maturity in years (T)
    #[cfg_attr(feature = "serde", serde(default))]
    pub maturity: Option<f64>,
    /// Cost of carry (b)
    pub cost_of_carry: f64,
}

impl OptionParameters {
    /// Creates a parameter set with a maturity.
    ///
    /// Argument order follows the conventional `(S, K, r, σ, T, b)`.
    #[inline]
    pub fn new(
        spot: f64,
        strike: f64,
        rate: f64,
        volatility: f64,
        maturity: f64,
        cost_of_carry: f64,
    ) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            maturity: Some(maturity),
            cost_of_carry,
        }
    }

    /// Creates a parameter set without a maturity.
    #[inline]
    pub fn perpetual(spot: f64, strike: f64, rate: f64, volatility: f64, cost_of_carry: f64) -> Self {
        Self {
            spot,
            strike,
            rate,
            volatility,
            maturity: None,
            cost_of_carry,
        }
    }

    /// Returns the maturity or an `InvalidParameter` error if absent.
    #[inline]
    pub fn require_maturity(&self) -> Result<f64, PricingError> {
        self.maturity
            .ok_or_else(|| PricingError::invalid_parameter("maturity", "required but absent"))
    }

    /// Returns the continuous discount factor `e^{−rT}`.
    #[inline]
    pub fn discount_factor(&self) -> Result<f64, PricingError> {
        Ok((-self.rate * self.require_maturity()?).exp())
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }

    /// Returns a copy with a different rate.
    #[inline]
    pub fn with_rate(self, rate: f64) -> Self {
        Self { rate, ..self }
    }

    /// Returns a copy with a different volatility.
    #[inline]
    pub fn with_volatility(self, volatility: f64) -> Self {
        Self { volatility, ..self }
    }

    /// Returns a copy with a different maturity.
    #[inline]
    pub fn with_maturity(self, maturity: f64) -> Self {
        Self {
            maturity: Some(maturity),
            ..self
        }
    }

    /// Returns a copy with a different cost of carry.
    #[inline]
    pub fn with_cost_of_carry(self, cost_of_carry: f64) -> Self {
        Self {
            cost_of_carry,
            ..self
        }
    }

    /// Returns a copy without a maturity.
    #[inline]
    pub fn without_maturity(self) -> Self {
        Self {
            maturity: None,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_option_kind_toggle() {
        assert_eq!(OptionKind::Call.toggled(), OptionKind::Put);
        assert_eq!(OptionKind::Put.toggled(), OptionKind::Call);
        assert_eq!(OptionKind::Call.toggled().toggled(), OptionKind::Call);
    }

    #[test]
    fn test_option_kind_parse() {
        assert_eq!("Call".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!(" put ".parse::<OptionKind>().unwrap(), OptionKind::Put);
        assert_eq!("1".parse::<OptionKind>().unwrap(), OptionKind::Call);
        assert_eq!("2".parse::<OptionKind>().unwrap(), OptionKind::Put);

        let err = "straddle".parse::<OptionKind>().unwrap_err();
        assert!(err.is_domain_error());
    }

    #[test]
    fn test_option_kind_intrinsic() {
        assert_eq!(OptionKind::Call.intrinsic(110.0, 100.0), 10.0);
        assert_eq!(OptionKind::Call.intrinsic(90.0, 100.0), 0.0);
        assert_eq!(OptionKind::Put.intrinsic(90.0, 100.0), 10.0);
        assert_eq!(OptionKind::Put.intrinsic(110.0, 100.0), 0.0);
    }

    #[test]
    fn test_style_parse_and_display() {
        for style in [Style::European, Style::American, Style::Asian] {
            let parsed: Style = style.to_string().parse().unwrap();
            assert_eq!(parsed, style);
        }
        assert!("bermudan".parse::<Style>().unwrap_err().is_domain_error());
    }

    #[test]
    fn test_style_requires_maturity() {
        assert!(Style::European.requires_maturity());
        assert!(Style::Asian.requires_maturity());
        assert!(!Style::American.requires_maturity());
    }

    #[test]
    fn test_require_maturity() {
        let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05);
        assert_eq!(params.require_maturity().unwrap(), 1.0);

        let perpetual = params.without_maturity();
        let err = perpetual.require_maturity().unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidParameter {
                field: "maturity",
                ..
            }
        ));
    }

    #[test]
    fn test_discount_factor() {
        let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 2.0, 0.05);
        let df = params.discount_factor().unwrap();
        assert_relative_eq!(df, (-0.1_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(df * (0.1_f64).exp(), 1.0, max_relative = 1e-15);
    }

    #[test]
    fn test_with_methods_leave_original_untouched() {
        let base = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05);
        let bumped = base
            .with_spot(101.0)
            .with_strike(95.0)
            .with_rate(0.06)
            .with_volatility(0.25)
            .with_maturity(2.0)
            .with_cost_of_carry(0.01);

        assert_eq!(base.spot, 100.0);
        assert_eq!(bumped.spot, 101.0);
        assert_eq!(bumped.strike, 95.0);
        assert_eq!(bumped.rate, 0.06);
        assert_eq!(bumped.volatility, 0.25);
        assert_eq!(bumped.maturity, Some(2.0));
        assert_eq!(bumped.cost_of_carry, 0.01);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_roundtrip_without_maturity() {
        let json = r#"{"spot":100.0,"strike":90.0,"rate":0.05,"volatility":0.2,"cost_of_carry":0.0}"#;
        let params: OptionParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.maturity, None);
        assert_eq!(params.strike, 90.0);

        let kind: OptionKind = serde_json::from_str("\"put\"").unwrap();
        assert_eq!(kind, OptionKind::Put);
        let style: Style = serde_json::from_str("\"asian\"").unwrap();
        assert_eq!(style, Style::Asian);
    }
}
