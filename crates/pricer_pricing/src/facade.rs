//! Single entry point dispatching on `(Style, OptionKind)`.
//!
//! This module provides:
//! - [`PricingFacade`]: Routes requests to Black-Scholes, the American
//!   approximation, or the Monte Carlo engine
//! - [`PricePoint`]: Price plus whatever the style can report alongside it
//! - [`ParityCheck`]: Put-call parity result
//!
//! Greeks and parity are European-only; asking for them on another style
//! is a `DomainError`. Asian pricing needs a [`SimulationConfig`] and a
//! caller-owned random source.

use pricer_core::types::{OptionKind, OptionParameters, PricingError, Style};
use pricer_models::analytical::{AmericanApproximation, BlackScholes, Greeks};
use tracing::debug;

use crate::mc::{McEstimate, MonteCarloEngine, SimulationConfig};
use crate::rng::RandomSource;

/// Result of a put-call parity check.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParityCheck {
    /// Price of the opposite kind implied by the known price.
    pub implied_other_price: f64,
    /// Whether the known price and the Black-Scholes price of the
    /// opposite kind satisfy parity within tolerance.
    pub parity_holds: bool,
}

/// Engine output for one request.
///
/// `greeks` is present for European options only, `std_error` for Asian
/// options only.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Fair value.
    pub price: f64,
    /// Monte Carlo standard error.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub std_error: Option<f64>,
    /// Analytical Greeks.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none", default))]
    pub greeks: Option<Greeks>,
}

impl From<McEstimate> for PricePoint {
    fn from(estimate: McEstimate) -> Self {
        Self {
            price: estimate.price,
            std_error: Some(estimate.std_error),
            greeks: None,
        }
    }
}

/// Pricing facade.
///
/// Stateless apart from the optional simulation configuration, so one
/// facade can be shared across threads.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, OptionParameters, Style};
/// use pricer_pricing::PricingFacade;
///
/// let facade = PricingFacade::new();
/// let params = OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08);
///
/// let call = facade.price_closed_form(&params, OptionKind::Call, Style::European).unwrap();
/// assert!((call - 2.1334).abs() < 1e-4);
///
/// let check = facade
///     .put_call_parity(&params, call, OptionKind::Call, Style::European)
///     .unwrap();
/// assert!(check.parity_holds);
///
/// // Greeks are European-only
/// let err = facade.greeks(&params, OptionKind::Call, Style::American).unwrap_err();
/// assert!(err.is_domain_error());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PricingFacade {
    simulation: Option<SimulationConfig>,
}

impl PricingFacade {
    /// Creates a facade without Monte Carlo support.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a facade that can price Asian options.
    #[inline]
    pub fn with_simulation(config: SimulationConfig) -> Self {
        Self {
            simulation: Some(config),
        }
    }

    /// Returns the simulation configuration, if any.
    #[inline]
    pub fn simulation(&self) -> Option<&SimulationConfig> {
        self.simulation.as_ref()
    }

    /// Prices an option of any style.
    ///
    /// `rng` is only drawn from for Asian options.
    ///
    /// # Errors
    ///
    /// - `DomainError` for Asian options when no simulation config is set
    /// - `InvalidParameter` / `NumericalInstability` from the selected engine
    pub fn price<R: RandomSource>(
        &self,
        params: &OptionParameters,
        kind: OptionKind,
        style: Style,
        rng: &mut R,
    ) -> Result<f64, PricingError> {
        match style {
            Style::Asian => Ok(self.price_asian(params, kind, rng)?.price),
            Style::European | Style::American => self.price_closed_form(params, kind, style),
        }
    }

    /// Prices a European or American option without a random source.
    ///
    /// # Errors
    ///
    /// `DomainError` for Asian options, otherwise engine errors.
    pub fn price_closed_form(
        &self,
        params: &OptionParameters,
        kind: OptionKind,
        style: Style,
    ) -> Result<f64, PricingError> {
        debug!(%style, %kind, "Closed-form pricing request");
        match style {
            Style::European => Ok(BlackScholes::new(params)?.price(kind)?),
            Style::American => Ok(AmericanApproximation::new(params)?.price(kind)?),
            Style::Asian => Err(PricingError::domain(
                "Asian options have no closed form; price them by simulation",
            )),
        }
    }

    /// Returns delta, gamma, vega, theta and rho.
    ///
    /// # Errors
    ///
    /// `DomainError` for any style other than European.
    pub fn greeks(
        &self,
        params: &OptionParameters,
        kind: OptionKind,
        style: Style,
    ) -> Result<Greeks, PricingError> {
        require_european(style, "Greeks")?;
        Ok(BlackScholes::new(params)?.greeks(kind)?)
    }

    /// Derives the opposite-kind price from `known_price` and checks parity.
    ///
    /// `known_price` is the price of an option of kind `kind`. The check
    /// compares it with the Black-Scholes price of the opposite kind.
    ///
    /// # Errors
    ///
    /// `DomainError` for any style other than European.
    pub fn put_call_parity(
        &self,
        params: &OptionParameters,
        known_price: f64,
        kind: OptionKind,
        style: Style,
    ) -> Result<ParityCheck, PricingError> {
        require_european(style, "Put-call parity")?;
        let engine = BlackScholes::new(params)?;
        let legs = engine.parity_legs();
        let implied_other_price = legs.implied_price(known_price, kind);
        let other_price = engine.price(kind.toggled())?;

        let (call, put) = match kind {
            OptionKind::Call => (known_price, other_price),
            OptionKind::Put => (other_price, known_price),
        };

        Ok(ParityCheck {
            implied_other_price,
            parity_holds: legs.holds(call, put),
        })
    }

    /// Prices an option and attaches Greeks (European) or the standard
    /// error (Asian).
    pub fn evaluate<R: RandomSource>(
        &self,
        params: &OptionParameters,
        kind: OptionKind,
        style: Style,
        rng: &mut R,
    ) -> Result<PricePoint, PricingError> {
        match style {
            Style::European => {
                let engine = BlackScholes::new(params)?;
                Ok(PricePoint {
                    price: engine.price(kind)?,
                    std_error: None,
                    greeks: Some(engine.greeks(kind)?),
                })
            }
            Style::American => Ok(PricePoint {
                price: AmericanApproximation::new(params)?.price(kind)?,
                std_error: None,
                greeks: None,
            }),
            Style::Asian => Ok(self.price_asian(params, kind, rng)?.into()),
        }
    }

    fn price_asian<R: RandomSource>(
        &self,
        params: &OptionParameters,
        kind: OptionKind,
        rng: &mut R,
    ) -> Result<McEstimate, PricingError> {
        let config = self.simulation.ok_or_else(|| {
            PricingError::domain("Asian pricing requires a simulation configuration")
        })?;
        MonteCarloEngine::new(config).price_asian(params, kind, rng)
    }
}

fn require_european(style: Style, operation: &str) -> Result<(), PricingError> {
    match style {
        Style::European => Ok(()),
        other => Err(PricingError::domain(format!(
            "{} are only defined for European options, not {}",
            operation, other
        ))),
    }
}
