//! Closed-form reference prices for Monte Carlo verification.
//!
//! - [`geometric_asian`]: Discrete geometric-average Asian option, which
//!   brackets the arithmetic-average Monte Carlo estimate

mod asian;

pub use asian::geometric_asian;
