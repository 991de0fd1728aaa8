//! Path generation for Monte Carlo simulation.
//!
//! This module implements Geometric Brownian Motion (GBM) path generation
//! with the log-space (exact) step:
//!
//! ```text
//! S(t+Δt) = S(t) × exp((r − σ²/2)Δt + σ√Δt × Z)
//! ```
//!
//! # Memory Layout
//!
//! A path is a slice of `N + 1` prices where index `0` holds the initial
//! spot and index `i` the price after step `i`.

use pricer_core::types::{OptionParameters, PricingError};

use crate::rng::RandomSource;

/// Parameters for Geometric Brownian Motion path generation.
///
/// # Model
///
/// Risk-neutral dynamics with drift equal to the risk-free rate:
/// ```text
/// dS = r S dt + σ S dW
/// ```
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::GbmParams;
///
/// let params = GbmParams::new(100.0, 0.05, 0.2, 1.0);
/// assert_eq!(params.maturity, 1.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams {
    /// Initial spot price (S₀).
    pub spot: f64,
    /// Risk-free rate (r) - annualised.
    pub rate: f64,
    /// Volatility (σ) - annualised.
    pub volatility: f64,
    /// Time to maturity (T) - in years.
    pub maturity: f64,
}

impl GbmParams {
    /// Creates new GBM parameters.
    #[inline]
    pub fn new(spot: f64, rate: f64, volatility: f64, maturity: f64) -> Self {
        Self {
            spot,
            rate,
            volatility,
            maturity,
        }
    }

    /// Extracts the GBM inputs from an option parameter set.
    ///
    /// # Errors
    ///
    /// `PricingError::InvalidParameter` if the maturity is absent.
    pub fn from_option(params: &OptionParameters) -> Result<Self, PricingError> {
        Ok(Self::new(
            params.spot,
            params.rate,
            params.volatility,
            params.require_maturity()?,
        ))
    }
}

/// Discretised GBM path generator.
///
/// Precomputes `(r − σ²/2)Δt` and `σ√Δt` once; every path then costs `N`
/// normal draws and `N` exponentials.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{GbmParams, PathSimulator};
/// use pricer_pricing::rng::PricerRng;
///
/// let simulator = PathSimulator::new(GbmParams::new(100.0, 0.05, 0.2, 1.0), 12);
/// let path = simulator.generate(&mut PricerRng::from_seed(42));
///
/// assert_eq!(path.len(), 13);
/// assert_eq!(path[0], 100.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSimulator {
    spot: f64,
    time_steps: usize,
    drift_dt: f64,
    vol_sqrt_dt: f64,
}

impl PathSimulator {
    /// Creates a simulator for `time_steps` equal steps over the maturity.
    pub fn new(params: GbmParams, time_steps: usize) -> Self {
        let dt = params.maturity / time_steps as f64;
        Self {
            spot: params.spot,
            time_steps,
            drift_dt: (params.rate - 0.5 * params.volatility * params.volatility) * dt,
            vol_sqrt_dt: params.volatility * dt.sqrt(),
        }
    }

    /// Returns the number of steps `N`.
    #[inline]
    pub fn time_steps(&self) -> usize {
        self.time_steps
    }

    /// Returns the path length `N + 1`.
    #[inline]
    pub fn path_len(&self) -> usize {
        self.time_steps + 1
    }

    /// Generates one path into a fresh vector of length `N + 1`.
    pub fn generate<R: RandomSource>(&self, rng: &mut R) -> Vec<f64> {
        let mut path = vec![0.0; self.path_len()];
        self.generate_into(rng, &mut path);
        path
    }

    /// Generates one path into a caller-provided buffer.
    ///
    /// Only the first `N + 1` entries are written.
    ///
    /// # Panics
    ///
    /// Panics if `path` is shorter than `N + 1`.
    pub fn generate_into<R: RandomSource>(&self, rng: &mut R, path: &mut [f64]) {
        let path = &mut path[..self.path_len()];
        path[0] = self.spot;
        for step in 1..path.len() {
            let z = rng.standard_normal();
            path[step] = path[step - 1] * (self.drift_dt + self.vol_sqrt_dt * z).exp();
        }
    }
}
