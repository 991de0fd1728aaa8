//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Errors specific to the closed-form engines

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Engines in this crate return `AnalyticalError` and callers above this
/// layer receive it as a [`PricingError`] through the `From` conversion.
///
/// # Variants
/// - `Invalid`: Parameter validation failed
/// - `MissingMaturity`: Engine needs a maturity that was not supplied
/// - `NumericalInstability`: Computation hit a degenerate or non-finite region
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::NumericalInstability {
///     message: "y1 - 1 too close to zero".to_string(),
/// };
/// let pricing: PricingError = err.into();
/// assert!(pricing.is_numerical_instability());
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Parameter validation failed.
    #[error(transparent)]
    Invalid(#[from] PricingError),

    /// Maturity required but absent.
    #[error("{engine} requires a maturity")]
    MissingMaturity {
        /// Name of the engine that needed it
        engine: &'static str,
    },

    /// Numerical instability during computation.
    #[error("{message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl AnalyticalError {
    /// Shorthand for `NumericalInstability`.
    #[inline]
    pub fn instability(message: impl Into<String>) -> Self {
        Self::NumericalInstability {
            message: message.into(),
        }
    }
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::Invalid(inner) => inner,
            AnalyticalError::MissingMaturity { .. } => {
                PricingError::invalid_parameter("maturity", err.to_string())
            }
            AnalyticalError::NumericalInstability { message } => {
                PricingError::NumericalInstability(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_passes_through() {
        let inner = PricingError::invalid_parameter("spot", "must be strictly positive, got 0");
        let err: AnalyticalError = inner.clone().into();
        assert_eq!(PricingError::from(err), inner);
    }

    #[test]
    fn test_missing_maturity_maps_to_invalid_parameter() {
        let err = AnalyticalError::MissingMaturity {
            engine: "Black-Scholes",
        };
        assert_eq!(format!("{}", err), "Black-Scholes requires a maturity");

        match PricingError::from(err) {
            PricingError::InvalidParameter { field, reason } => {
                assert_eq!(field, "maturity");
                assert!(reason.contains("Black-Scholes"));
            }
            other => panic!("Expected InvalidParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_instability_maps_across() {
        let err = AnalyticalError::instability("non-finite price");
        let pricing = PricingError::from(err);
        assert!(pricing.is_numerical_instability());
        assert!(pricing.to_string().contains("non-finite price"));
    }
}
