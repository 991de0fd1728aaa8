//! Monte Carlo pricing engine.
//!
//! This module provides the orchestration layer for arithmetic-average
//! Asian pricing.
//!
//! # Overview
//!
//! The [`MonteCarloEngine`] coordinates:
//! 1. Parameter validation (via [`ParameterValidator`])
//! 2. Path generation (via [`PathSimulator`])
//! 3. Payoff computation (via [`asian_payoff`])
//! 4. Aggregation into mean and standard error, then discounting
//!
//! Paths are drawn serially from the caller's random source, or in parallel
//! from its sub-streams, depending on [`SimulationConfig::execution`].

use pricer_core::types::{OptionKind, OptionParameters, PricingError};
use pricer_core::validation::ParameterValidator;
use tracing::debug;

use super::config::{Execution, SimulationConfig};
use super::parallel::accumulate_parallel;
use super::paths::{GbmParams, PathSimulator};
use super::payoff::asian_payoff;
use crate::rng::RandomSource;

/// Monte Carlo price estimate.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::McEstimate;
///
/// let estimate = McEstimate {
///     price: 5.85,
///     std_error: 0.026,
///     path_count: 100_000,
/// };
///
/// println!("Price: {} +/- {}", estimate.price, estimate.confidence_95());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct McEstimate {
    /// Discounted mean payoff.
    pub price: f64,
    /// Standard error of the price estimate.
    pub std_error: f64,
    /// Number of simulated paths.
    pub path_count: usize,
}

impl McEstimate {
    /// Returns the 95% confidence interval half-width.
    #[inline]
    pub fn confidence_95(&self) -> f64 {
        1.96 * self.std_error
    }

    /// Returns the 99% confidence interval half-width.
    #[inline]
    pub fn confidence_99(&self) -> f64 {
        2.576 * self.std_error
    }
}

/// Running sum and sum of squares of undiscounted payoffs.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct PayoffAccumulator {
    sum: f64,
    sum_sq: f64,
    count: usize,
}

impl PayoffAccumulator {
    #[inline]
    pub(crate) fn add(&mut self, payoff: f64) {
        self.sum += payoff;
        self.sum_sq += payoff * payoff;
        self.count += 1;
    }

    #[inline]
    pub(crate) fn merge(&mut self, other: &Self) {
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;
    }

    #[cfg(test)]
    pub(crate) fn sum(&self) -> f64 {
        self.sum
    }

    #[cfg(test)]
    pub(crate) fn sum_sq(&self) -> f64 {
        self.sum_sq
    }

    #[cfg(test)]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Discounted mean and standard error.
    fn estimate(&self, discount_factor: f64) -> McEstimate {
        let n = self.count.max(1) as f64;
        let mean = self.sum / n;
        let variance = (self.sum_sq / n) - mean * mean;
        let std_error = variance.max(0.0).sqrt() / n.sqrt();

        McEstimate {
            price: mean * discount_factor,
            std_error: std_error * discount_factor,
            path_count: self.count,
        }
    }
}

/// Monte Carlo engine for arithmetic-average Asian options.
///
/// Holds only the immutable [`SimulationConfig`]; the random source is
/// borrowed per call, so one engine can price concurrently from several
/// threads with independent sources.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionKind, OptionParameters};
/// use pricer_pricing::mc::{MonteCarloEngine, SimulationConfig};
/// use pricer_pricing::rng::PricerRng;
///
/// let engine = MonteCarloEngine::new(SimulationConfig::new(20_000, 50).unwrap());
/// let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05);
///
/// let mut rng = PricerRng::from_seed(42);
/// let estimate = engine.price_asian(&params, OptionKind::Call, &mut rng).unwrap();
/// assert!((estimate.price - 5.85).abs() < 0.3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MonteCarloEngine {
    config: SimulationConfig,
}

impl MonteCarloEngine {
    /// Creates an engine with a validated configuration.
    #[inline]
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Prices an arithmetic-average Asian call.
    pub fn price_asian_call<R: RandomSource>(
        &self,
        params: &OptionParameters,
        rng: &mut R,
    ) -> Result<McEstimate, PricingError> {
        self.price_asian(params, OptionKind::Call, rng)
    }

    /// Prices an arithmetic-average Asian put.
    pub fn price_asian_put<R: RandomSource>(
        &self,
        params: &OptionParameters,
        rng: &mut R,
    ) -> Result<McEstimate, PricingError> {
        self.price_asian(params, OptionKind::Put, rng)
    }

    /// Prices an arithmetic-average Asian option.
    ///
    /// Each path averages `path[1..=N]`, pays `max(0, A − K)` or
    /// `max(0, K − A)`, and the mean payoff is discounted by `e^{−rT}`.
    /// Serial execution advances `rng`; parallel execution leaves it
    /// untouched and draws from `rng.substream(i)` for path `i`.
    ///
    /// # Errors
    ///
    /// - `PricingError::InvalidParameter` if validation fails or maturity is absent
    /// - `PricingError::NumericalInstability` if the estimate is not finite
    pub fn price_asian<R: RandomSource>(
        &self,
        params: &OptionParameters,
        kind: OptionKind,
        rng: &mut R,
    ) -> Result<McEstimate, PricingError> {
        let maturity = ParameterValidator::validate_with_maturity(params)?;
        let simulator = PathSimulator::new(GbmParams::from_option(params)?, self.config.time_steps());
        let strike = params.strike;
        let path_count = self.config.path_count();

        debug!(
            %kind,
            path_count,
            time_steps = self.config.time_steps(),
            execution = ?self.config.execution(),
            "Simulating Asian option"
        );

        let acc = match self.config.execution() {
            Execution::Serial => {
                let mut acc = PayoffAccumulator::default();
                let mut buffer = vec![0.0; simulator.path_len()];
                for _ in 0..path_count {
                    simulator.generate_into(rng, &mut buffer);
                    acc.add(asian_payoff(kind, &buffer, strike));
                }
                acc
            }
            Execution::Parallel => accumulate_parallel(&simulator, rng, path_count, |path| {
                asian_payoff(kind, path, strike)
            }),
        };

        let estimate = acc.estimate((-params.rate * maturity).exp());
        if !estimate.price.is_finite() || !estimate.std_error.is_finite() {
            return Err(PricingError::instability(format!(
                "Monte Carlo estimate is not finite (price = {}, std_error = {})",
                estimate.price, estimate.std_error
            )));
        }

        debug!(price = estimate.price, std_error = estimate.std_error, "Asian estimate");
        Ok(estimate)
    }
}
