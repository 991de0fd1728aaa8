//! Core option and error types.
//!
//! This module provides:
//! - `option`: [`OptionKind`], [`Style`], and the immutable [`OptionParameters`]
//! - `error`: The [`PricingError`] taxonomy shared by all pricing layers

pub mod error;
pub mod option;

// Re-export commonly used types at module level
pub use error::PricingError;
pub use option::{OptionKind, OptionParameters, Style};
