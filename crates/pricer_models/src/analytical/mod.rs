//! Closed-form pricing engines.
//!
//! This module provides:
//! - Generalised Black-Scholes with cost of carry and analytical Greeks
//! - Put-call parity helpers
//! - The perpetual American quadratic approximation
//! - Divided-difference Greeks for any closed-form price
//!
//! Every engine constructor runs the shared
//! [`ParameterValidator`](pricer_core::validation::ParameterValidator)
//! before any formula is evaluated.

pub mod american;
pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod finite_difference;
pub mod parity;

// Re-export main types at module level
pub use american::AmericanApproximation;
pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use parity::{call_from_put, parity_holds, put_from_call, ParityLegs, PARITY_TOLERANCE};
