//! Error types for analytical pricing operations.

use bspricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Structured errors for the closed-form models. Volatility and expiry are
/// deliberately not validated here: non-positive values route pricing into
/// the intrinsic-value branch instead of failing.
///
/// # Examples
/// ```
/// use bspricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidSpot { spot: -100.0 };
/// assert!(format!("{}", err).contains("spot"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (must be positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid forward price (must be positive).
    #[error("Invalid forward price: F = {forward}")]
    InvalidForward {
        /// The invalid forward price value
        forward: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {message}")]
    NumericalInstability {
        /// Description of the numerical issue
        message: String,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        match err {
            AnalyticalError::InvalidSpot { .. } | AnalyticalError::InvalidForward { .. } => {
                PricingError::InvalidInput(err.to_string())
            }
            AnalyticalError::NumericalInstability { .. } => {
                PricingError::NumericalInstability(err.to_string())
            }
        }
    }
}
