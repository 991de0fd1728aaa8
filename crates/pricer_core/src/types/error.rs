//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The single error taxonomy surfaced by every pricing
//!   operation in the workspace

use thiserror::Error;

/// Categorised pricing errors.
///
/// Every public pricing operation returns `Result<_, PricingError>`.
/// Failures are deterministic: the same inputs always fail the same way,
/// so callers should never retry.
///
/// # Variants
/// - `InvalidParameter`: NaN, infinite, non-positive or out-of-range input
/// - `DomainError`: Unsupported style/kind combination or request
/// - `NumericalInstability`: Degenerate algebra that would produce NaN/Inf
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::invalid_parameter("spot", "must be positive, got 0");
/// assert_eq!(format!("{}", err), "Invalid parameter 'spot': must be positive, got 0");
/// ```
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// Input failed validation before any formula ran.
    #[error("Invalid parameter '{field}': {reason}")]
    InvalidParameter {
        /// Name of the offending field
        field: &'static str,
        /// Human-readable description of the violation
        reason: String,
    },

    /// Request is not defined for the given style or kind.
    #[error("Domain error: {0}")]
    DomainError(String),

    /// Computation hit a degenerate configuration.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

impl PricingError {
    /// Creates an `InvalidParameter` error.
    pub fn invalid_parameter(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a `DomainError`.
    pub fn domain(msg: impl Into<String>) -> Self {
        Self::DomainError(msg.into())
    }

    /// Creates a `NumericalInstability` error.
    pub fn instability(msg: impl Into<String>) -> Self {
        Self::NumericalInstability(msg.into())
    }

    /// Returns true for input-validation failures.
    #[inline]
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, Self::InvalidParameter { .. })
    }

    /// Returns true for dispatch failures.
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, Self::DomainError(_))
    }

    /// Returns true for degenerate-computation failures.
    #[inline]
    pub fn is_numerical_instability(&self) -> bool {
        matches!(self, Self::NumericalInstability(_))
    }
}
