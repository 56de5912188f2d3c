//! Vanilla option definitions.
//!
//! Parameter structures for European options across asset classes:
//! equity (spot/strike with dividend yield), FX (dual-rate), and rates
//! (forward-based).

use num_traits::Float;

use super::error::InstrumentError;
use super::option_type::OptionType;

/// European equity option.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::{EquityOption, OptionType};
///
/// let option = EquityOption::new(
///     100.0_f64, // spot
///     100.0,     // strike
///     1.0,       // expiry (years)
///     0.05,      // risk-free rate
///     0.0,       // dividend yield
///     0.2,       // volatility
///     OptionType::Call,
/// ).unwrap();
///
/// assert_eq!(option.spot, 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquityOption<T: Float> {
    /// Spot price of the underlying.
    pub spot: T,
    /// Strike price.
    pub strike: T,
    /// Time to expiry in years; non-positive values settle at intrinsic.
    pub expiry: T,
    /// Continuously compounded risk-free rate.
    pub rate: T,
    /// Continuous dividend yield.
    pub dividend_yield: T,
    /// Annualised volatility; non-positive values settle at intrinsic.
    pub volatility: T,
    /// Call or put.
    pub option_type: OptionType,
}

impl<T: Float> EquityOption<T> {
    /// Creates a new equity option, validating spot and strike positivity.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` if spot <= 0
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate: T,
        dividend_yield: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        validate_positive_prices(spot, strike)?;
        Ok(Self {
            spot,
            strike,
            expiry,
            rate,
            dividend_yield,
            volatility,
            option_type,
        })
    }
}

/// European FX option under the two-rate (Garman-Kohlhagen) convention.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::{FxOption, OptionType};
///
/// let option = FxOption::new(
///     1.10_f64, // spot (domestic per foreign)
///     1.12,     // strike
///     1.0,      // expiry
///     0.03,     // domestic rate
///     0.01,     // foreign rate
///     0.15,     // volatility
///     OptionType::Call,
/// ).unwrap();
///
/// assert_eq!(option.rate_foreign, 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxOption<T: Float> {
    /// Spot exchange rate (domestic per foreign).
    pub spot: T,
    /// Strike exchange rate.
    pub strike: T,
    /// Time to expiry in years.
    pub expiry: T,
    /// Domestic risk-free rate.
    pub rate_domestic: T,
    /// Foreign risk-free rate.
    pub rate_foreign: T,
    /// Annualised volatility of the exchange rate.
    pub volatility: T,
    /// Call or put on the foreign currency.
    pub option_type: OptionType,
}

impl<T: Float> FxOption<T> {
    /// Creates a new FX option, validating spot and strike positivity.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidSpot` if spot <= 0
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        spot: T,
        strike: T,
        expiry: T,
        rate_domestic: T,
        rate_foreign: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        validate_positive_prices(spot, strike)?;
        Ok(Self {
            spot,
            strike,
            expiry,
            rate_domestic,
            rate_foreign,
            volatility,
            option_type,
        })
    }
}

/// European option on a forward rate, priced with Black-76.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::{RateOption, OptionType};
///
/// let option = RateOption::new(
///     0.03_f64, // forward
///     0.025,    // strike
///     1.0,      // expiry
///     0.02,     // discount rate
///     0.2,      // volatility
///     OptionType::Call,
/// ).unwrap();
///
/// assert_eq!(option.forward, 0.03);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateOption<T: Float> {
    /// Forward price or rate.
    pub forward: T,
    /// Strike level.
    pub strike: T,
    /// Time to expiry in years.
    pub expiry: T,
    /// Continuously compounded discount rate.
    pub discount_rate: T,
    /// Annualised lognormal volatility of the forward.
    pub volatility: T,
    /// Call or put.
    pub option_type: OptionType,
}

impl<T: Float> RateOption<T> {
    /// Creates a new rate option, validating forward and strike positivity.
    ///
    /// # Errors
    /// - `InstrumentError::InvalidForward` if forward <= 0
    /// - `InstrumentError::InvalidStrike` if strike <= 0
    pub fn new(
        forward: T,
        strike: T,
        expiry: T,
        discount_rate: T,
        volatility: T,
        option_type: OptionType,
    ) -> Result<Self, InstrumentError> {
        if forward <= T::zero() {
            return Err(InstrumentError::InvalidForward {
                forward: forward.to_f64().unwrap_or(0.0),
            });
        }
        if strike <= T::zero() {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self {
            forward,
            strike,
            expiry,
            discount_rate,
            volatility,
            option_type,
        })
    }
}

fn validate_positive_prices<T: Float>(spot: T, strike: T) -> Result<(), InstrumentError> {
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
    Ok(())
}
