//! # Pricer Pricing (Layer 3: Engines and Facade)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing sits on top of the closed-form models and provides:
//! - Caller-owned random sources with deterministic sub-streams (`rng`)
//! - The arithmetic-average Asian Monte Carlo engine (`mc`)
//! - A discrete geometric-Asian closed form used to verify it (`analytical`)
//! - The [`PricingFacade`] that dispatches on `(Style, OptionKind)` (`facade`)
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_core::types::{OptionKind, OptionParameters, Style};
//! use pricer_pricing::mc::SimulationConfig;
//! use pricer_pricing::rng::PricerRng;
//! use pricer_pricing::PricingFacade;
//!
//! let facade = PricingFacade::with_simulation(SimulationConfig::new(10_000, 50).unwrap());
//! let params = OptionParameters::new(100.0, 100.0, 0.05, 0.2, 1.0, 0.05);
//! let mut rng = PricerRng::from_seed(42);
//!
//! let european = facade.evaluate(&params, OptionKind::Call, Style::European, &mut rng).unwrap();
//! let asian = facade.evaluate(&params, OptionKind::Call, Style::Asian, &mut rng).unwrap();
//!
//! assert!(european.greeks.is_some());
//! assert!(asian.price < european.price);
//! ```
//!
//! ## Concurrency
//!
//! All engines are stateless between calls. `Execution::Parallel` spreads
//! paths over the rayon pool; nothing else spawns threads.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod facade;
pub mod mc;
pub mod rng;

pub use facade::{ParityCheck, PricePoint, PricingFacade};
