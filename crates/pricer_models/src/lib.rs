//! # Pricer Models (L2: Business Logic)
//!
//! Closed-form option pricing engines.
//!
//! This crate provides:
//! - European Black-Scholes pricing with cost of carry and the five Greeks
//! - Put-call parity conversion and consistency checks
//! - The perpetual American quadratic approximation
//! - Divided-difference Greeks used as a cross-check
//!
//! ## Design Principles
//!
//! - **Validate once at construction**: engines hold validated inputs only
//! - **Kind as an argument**: call/put is passed to each method, never stored
//! - **No silent NaN**: non-finite results surface as `NumericalInstability`
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, OptionParameters};
//! use pricer_models::analytical::{parity_holds, BlackScholes};
//!
//! let params = OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08);
//! let bs = BlackScholes::new(&params).unwrap();
//! let call = bs.price(OptionKind::Call).unwrap();
//! let put = bs.price(OptionKind::Put).unwrap();
//! assert!(parity_holds(&params, call, put).unwrap());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
