//! Error types for instrument construction.

use bspricer_core::types::PricingError;
use thiserror::Error;

/// Instrument validation errors.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::UnknownOptionType { value: "calll".to_string() };
/// assert!(format!("{}", err).contains("calll"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InstrumentError {
    /// Invalid spot price (must be positive).
    #[error("Invalid spot price: {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (must be positive).
    #[error("Invalid strike price: {strike}")]
    InvalidStrike {
        /// The invalid strike price value
        strike: f64,
    },

    /// Invalid forward price (must be positive).
    #[error("Invalid forward price: {forward}")]
    InvalidForward {
        /// The invalid forward price value
        forward: f64,
    },

    /// Invalid notional (must be positive).
    #[error("Invalid notional: {notional}")]
    InvalidNotional {
        /// The invalid notional value
        notional: f64,
    },

    /// Invalid maturity (must be positive for schedule-bearing instruments).
    #[error("Invalid maturity: {maturity}")]
    InvalidMaturity {
        /// The invalid maturity value
        maturity: f64,
    },

    /// Invalid recovery rate (must lie in [0, 1)).
    #[error("Invalid recovery rate: {recovery_rate}")]
    InvalidRecoveryRate {
        /// The invalid recovery rate value
        recovery_rate: f64,
    },

    /// Invalid payment frequency (must be at least 1 per year).
    #[error("Invalid payment frequency: {frequency}")]
    InvalidPaymentFrequency {
        /// The invalid payment frequency
        frequency: u32,
    },

    /// Invalid digital payout (must be positive).
    #[error("Invalid payout: {payout}")]
    InvalidPayout {
        /// The invalid payout value
        payout: f64,
    },

    /// Option type string not recognised.
    ///
    /// Only `"call"` and `"put"` are accepted; anything else is rejected
    /// rather than silently resolving to a put.
    #[error("Unknown option type: {value:?} (expected \"call\" or \"put\")")]
    UnknownOptionType {
        /// The unrecognised input
        value: String,
    },
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
