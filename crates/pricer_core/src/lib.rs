//! # pricer_core: Foundation Types for Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core serves as the bottom layer of the pricing workspace, providing:
//! - Option parameter value types: `OptionParameters`, `OptionKind`, `Style` (`types::option`)
//! - The error taxonomy: `PricingError` (`types::error`)
//! - The single parameter validator: `ParameterValidator` (`validation`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{OptionKind, OptionParameters, Style};
//! use pricer_core::validation::ParameterValidator;
//!
//! let params = OptionParameters::new(60.0, 65.0, 0.08, 0.30, 0.25, 0.08);
//! ParameterValidator::validate(&params).unwrap();
//!
//! assert_eq!(OptionKind::Call.toggled(), OptionKind::Put);
//! assert!(Style::European.requires_maturity());
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for parameter sets and enums

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod types;
pub mod validation;
