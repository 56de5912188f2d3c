//! Option type discriminator.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;

use super::error::InstrumentError;

/// Closed enumeration of vanilla option types.
///
/// Replaces a free-form string discriminator: parsing rejects anything
/// other than `"call"` or `"put"` (case-insensitive) instead of treating
/// unknown values as puts.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::OptionType;
///
/// let call: OptionType = "call".parse().unwrap();
/// assert!(call.is_call());
///
/// // Unrecognised inputs fail loudly
/// assert!("cal".parse::<OptionType>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Returns `true` for calls.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Exercise value at expiry, floored at zero.
    ///
    /// `max(spot - strike, 0)` for calls, `max(strike - spot, 0)` for puts.
    ///
    /// # Examples
    /// ```
    /// use bspricer_models::instruments::OptionType;
    ///
    /// assert_eq!(OptionType::Call.intrinsic(110.0_f64, 100.0), 10.0);
    /// assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let payoff = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        payoff.max(T::zero())
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = InstrumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "call" => Ok(OptionType::Call),
            "put" => Ok(OptionType::Put),
            _ => Err(InstrumentError::UnknownOptionType {
                value: s.to_string(),
            }),
        }
    }
}
