//! Error types for market data operations.

use crate::types::PricingError;
use thiserror::Error;

/// Market data errors.
///
/// # Variants
/// - `InvalidMaturity`: Negative or otherwise out-of-domain maturity
/// - `InvalidHazardRate`: Negative hazard rate
///
/// # Examples
/// ```
/// use bspricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::InvalidMaturity { t: -1.0 };
/// assert!(format!("{}", err).contains("maturity"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum MarketDataError {
    /// Maturity outside the valid domain of the curve.
    #[error("Invalid maturity: t = {t}")]
    InvalidMaturity {
        /// The invalid maturity value
        t: f64,
    },

    /// Negative hazard rate.
    #[error("Invalid hazard rate: λ = {hazard_rate}")]
    InvalidHazardRate {
        /// The invalid hazard rate value
        hazard_rate: f64,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
