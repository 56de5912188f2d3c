//! Exotic option definitions.
//!
//! Only instruments with a closed-form price belong here; path-dependent
//! products (barrier, Asian) require a simulation engine and are out of
//! scope for this library.

use num_traits::Float;

use super::error::InstrumentError;
use super::option_type::OptionType;

/// Cash-or-nothing digital option.
///
/// Pays a fixed `payout` at expiry when the option finishes in the money:
/// `spot > strike` for calls, `spot < strike` for puts.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::{DigitalOption, OptionType};
///
/// let digital = DigitalOption::new(
///     100.0_f64, // spot
///     105.0,     // strike
///     1.0,       // expiry
///     0.05,      // rate
///     0.0,       // dividend yield
///     0.2,       // volatility
///     10.0,      // payout
///     OptionType::Call,
/// ).unwrap();
///
/// assert_eq!(digital.payout, 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DigitalOption<T: Float> {
    /// Spot price of the underlying.
    pub spot: T,
    /// Strike price.
    pub strike: T,
    /// Time to expiry in years; non-positive values settle immediately.
    pub expiry: T,
    /// Continuously compounded risk-free rate.
    pub rate: T,
    /// Continuous dividend yield.
    pub dividend_yield: T,
    /// Annualised volatility.
    pub volatility: T,
    /// Fixed cash amount paid when in the money.
    pub payout: T,
    /// Call or put.
    pub option_type: OptionType,
}

impl<T: Float> DigitalOption<T> {
    /// Creates a new digital option.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` if spot <= 0
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    /// - `InstrumentError::InvalidPayout` if payout <= 0
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        dividend_yield: T,
        volatility: T,
        payout: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        if spot <= T::zero() {
            return Err(InstrumentError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }
        if strike <= T::zero() {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        if payout <= T::zero() {
            return Err(InstrumentError::InvalidPayout {
                payout: payout.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            dividend_yield,
            volatility,
            payout,
            option_type,
        })
    }
}
