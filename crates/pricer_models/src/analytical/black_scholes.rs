//! Generalised Black-Scholes pricing for European options.
//!
//! This module provides the Black-Scholes engine with a cost-of-carry term
//! `b`, closed-form Greeks, and the [`Greeks`] bundle.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b−r)T)·N(d₁) − K·e^(−rT)·N(d₂)
//! **Put Price**: P = K·e^(−rT)·N(−d₂) − S·e^((b−r)T)·N(−d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ − σ√T
//!
//! `b = r` gives the classic stock option, `b = r − q` a continuous
//! dividend yield and `b = 0` an option on a future.
//!
//! ## Greeks
//!
//! | Greek | Call | Put |
//! |-------|------|-----|
//! | Delta | e^((b−r)T)·N(d₁) | e^((b−r)T)·(N(d₁) − 1) |
//! | Gamma | e^((b−r)T)·φ(d₁) / (Sσ√T) | same |
//! | Vega  | S·e^((b−r)T)·φ(d₁)·√T | same |
//! | Rho   | K·T·e^(−rT)·N(d₂) | −K·T·e^(−rT)·N(−d₂) |
//!
//! Theta is the calendar-time decay −∂V/∂T. Rho is the sensitivity to a
//! parallel move of `r` and `b`.

use pricer_core::types::{OptionKind, OptionParameters};
use pricer_core::validation::ParameterValidator;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use super::parity::ParityLegs;

/// First- and second-order sensitivities of an option price.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Greeks {
    /// ∂V/∂S
    pub delta: f64,
    /// ∂²V/∂S²
    pub gamma: f64,
    /// ∂V/∂σ
    pub vega: f64,
    /// −∂V/∂T
    pub theta: f64,
    /// ∂V/∂r
    pub rho: f64,
}

/// Black-Scholes engine for a single validated parameter set.
///
/// Construction runs the [`ParameterValidator`] and requires a maturity.
/// Every pricing method then works on already-validated inputs and only
/// fails if the arithmetic itself produces a non-finite number.
///
/// # Examples
/// ```
/// use pricer_core::types::{OptionKind, OptionParameters};
/// use pricer_models::analytical::BlackScholes;
///
/// let params = OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08);
/// let bs = BlackScholes::new(&params).unwrap();
///
/// let call = bs.price(OptionKind::Call).unwrap();
/// assert!((call - 2.1334).abs() < 1e-4);
///
/// // Put-call parity: C − P = S·e^((b−r)T) − K·e^(−rT)
/// let put = bs.price(OptionKind::Put).unwrap();
/// let forward_gap = 60.0 - 65.0 * (-0.08_f64 * 0.25).exp();
/// assert!((call - put - forward_gap).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackScholes {
    spot: f64,
    strike: f64,
    rate: f64,
    volatility: f64,
    maturity: f64,
    cost_of_carry: f64,
}

impl BlackScholes {
    /// Creates an engine from a parameter set.
    ///
    /// # Errors
    /// - `AnalyticalError::MissingMaturity` if `maturity` is `None`
    /// - `AnalyticalError::Invalid` if the validator rejects the parameters
    pub fn new(params: &OptionParameters) -> Result<Self, AnalyticalError> {
        let maturity = params.maturity.ok_or(AnalyticalError::MissingMaturity {
            engine: "Black-Scholes",
        })?;
        ParameterValidator::validate(params)?;

        Ok(Self {
            spot: params.spot,
            strike: params.strike,
            rate: params.rate,
            volatility: params.volatility,
            maturity,
            cost_of_carry: params.cost_of_carry,
        })
    }

    /// Parity legs of the already-validated inputs.
    #[inline]
    pub fn parity_legs(&self) -> ParityLegs {
        ParityLegs::from_validated(self.spot, self.strike, self.rate, self.maturity)
    }

    #[inline]
    fn sqrt_t(&self) -> f64 {
        self.maturity.sqrt()
    }

    /// e^((b−r)T)
    #[inline]
    fn carry_factor(&self) -> f64 {
        ((self.cost_of_carry - self.rate) * self.maturity).exp()
    }

    /// e^(−rT)
    #[inline]
    fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Computes d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T).
    #[inline]
    pub fn d1(&self) -> f64 {
        let log_moneyness = (self.spot / self.strike).ln();
        let drift = (self.cost_of_carry + 0.5 * self.volatility * self.volatility) * self.maturity;
        (log_moneyness + drift) / (self.volatility * self.sqrt_t())
    }

    /// Computes d₂ = d₁ − σ√T.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d1() - self.volatility * self.sqrt_t()
    }

    /// Returns `(d₁, d₂)`, failing if either is not finite.
    fn terms(&self) -> Result<(f64, f64), AnalyticalError> {
        let d1 = finite("d1", self.d1())?;
        let d2 = finite("d2", self.d2())?;
        Ok((d1, d2))
    }

    /// Computes the option price for the given kind.
    ///
    /// # Errors
    /// `AnalyticalError::NumericalInstability` if d₁, d₂ or the result is
    /// not finite.
    pub fn price(&self, kind: OptionKind) -> Result<f64, AnalyticalError> {
        let (d1, d2) = self.terms()?;
        let forward_leg = self.spot * self.carry_factor();
        let strike_leg = self.strike * self.discount_factor();

        let price = match kind {
            OptionKind::Call => forward_leg * norm_cdf(d1) - strike_leg * norm_cdf(d2),
            OptionKind::Put => strike_leg * norm_cdf(-d2) - forward_leg * norm_cdf(-d1),
        };
        finite("price", price)
    }

    /// Computes the call price.
    #[inline]
    pub fn price_call(&self) -> Result<f64, AnalyticalError> {
        self.price(OptionKind::Call)
    }

    /// Computes the put price.
    #[inline]
    pub fn price_put(&self) -> Result<f64, AnalyticalError> {
        self.price(OptionKind::Put)
    }

    /// Computes delta (∂V/∂S).
    ///
    /// Call delta lies in `[0, e^((b−r)T)]`, put delta in `[−e^((b−r)T), 0]`.
    pub fn delta(&self, kind: OptionKind) -> Result<f64, AnalyticalError> {
        let (d1, _) = self.terms()?;
        let n_d1 = norm_cdf(d1);
        let delta = match kind {
            OptionKind::Call => self.carry_factor() * n_d1,
            OptionKind::Put => self.carry_factor() * (n_d1 - 1.0),
        };
        finite("delta", delta)
    }

    /// Computes gamma (∂²V/∂S²). Identical for calls and puts.
    pub fn gamma(&self) -> Result<f64, AnalyticalError> {
        let (d1, _) = self.terms()?;
        let gamma = norm_pdf(d1) * self.carry_factor()
            / (self.spot * self.volatility * self.sqrt_t());
        finite("gamma", gamma)
    }

    /// Computes vega (∂V/∂σ) per unit of volatility. Identical for calls and puts.
    pub fn vega(&self) -> Result<f64, AnalyticalError> {
        let (d1, _) = self.terms()?;
        let vega = self.spot * self.carry_factor() * self.sqrt_t() * norm_pdf(d1);
        finite("vega", vega)
    }

    /// Computes theta as −∂V/∂T, per year.
    pub fn theta(&self, kind: OptionKind) -> Result<f64, AnalyticalError> {
        let (d1, d2) = self.terms()?;
        let forward_leg = self.spot * self.carry_factor();
        let strike_leg = self.strike * self.discount_factor();
        let carry_spread = self.cost_of_carry - self.rate;

        let decay = -forward_leg * norm_pdf(d1) * self.volatility / (2.0 * self.sqrt_t());
        let theta = match kind {
            OptionKind::Call => {
                decay - carry_spread * forward_leg * norm_cdf(d1)
                    - self.rate * strike_leg * norm_cdf(d2)
            }
            OptionKind::Put => {
                decay
                    + carry_spread * forward_leg * norm_cdf(-d1)
                    + self.rate * strike_leg * norm_cdf(-d2)
            }
        };
        finite("theta", theta)
    }

    /// Computes rho (∂V/∂r) with `b` moving in step with `r`.
    pub fn rho(&self, kind: OptionKind) -> Result<f64, AnalyticalError> {
        let (_, d2) = self.terms()?;
        let weight = self.strike * self.maturity * self.discount_factor();
        let rho = match kind {
            OptionKind::Call => weight * norm_cdf(d2),
            OptionKind::Put => -weight * norm_cdf(-d2),
        };
        finite("rho", rho)
    }

    /// Computes all five Greeks for the given kind.
    pub fn greeks(&self, kind: OptionKind) -> Result<Greeks, AnalyticalError> {
        Ok(Greeks {
            delta: self.delta(kind)?,
            gamma: self.gamma()?,
            vega: self.vega()?,
            theta: self.theta(kind)?,
            rho: self.rho(kind)?,
        })
    }
}

#[inline]
fn finite(quantity: &str, value: f64) -> Result<f64, AnalyticalError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(AnalyticalError::instability(format!(
            "Black-Scholes {} is not finite ({})",
            quantity, value
        )))
    }
}
