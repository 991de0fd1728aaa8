//! Monte Carlo pricing for arithmetic-average Asian options.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloEngine
//! ├── SimulationConfig  (path count M, time steps N, execution mode)
//! ├── PathSimulator     (GBM log-space stepping)
//! ├── asian_payoff      (arithmetic mean of path[1..=N])
//! └── Aggregation
//!     ├── serial: caller's RandomSource, one reusable path buffer
//!     └── parallel: rayon fold/reduce over RandomSource::substream(i)
//! ```
//!
//! Cost is `O(M·N)` in both modes.
//!
//! # Examples
//!
//! ```rust
//! use pricer_core::types::OptionParameters;
//! use pricer_pricing::mc::{Execution, MonteCarloEngine, SimulationConfig};
//! use pricer_pricing::rng::PricerRng;
//!
//! let config = SimulationConfig::builder()
//!     .path_count(10_000)
//!     .time_steps(50)
//!     .execution(Execution::Parallel)
//!     .build()
//!     .unwrap();
//! let engine = MonteCarloEngine::new(config);
//!
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05);
//! let mut rng = PricerRng::from_seed(42);
//! let estimate = engine.price_asian_call(&params, &mut rng).unwrap();
//! println!("Asian call: {} +/- {}", estimate.price, estimate.confidence_95());
//! ```

pub mod config;
pub mod error;
mod parallel;
pub mod paths;
pub mod payoff;
pub mod pricer;

pub use config::{Execution, SimulationConfig, SimulationConfigBuilder, MAX_PATHS, MAX_STEPS};
pub use error::ConfigError;
pub use paths::{GbmParams, PathSimulator};
pub use payoff::{arithmetic_average, asian_payoff};
pub use pricer::{McEstimate, MonteCarloEngine};
