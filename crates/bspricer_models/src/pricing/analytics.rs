//! Analytic pricing of equity, FX, and digital options.

use bspricer_core::types::PricingError;
use num_traits::Float;

use crate::analytical::distributions::norm_cdf;
use crate::analytical::{BlackScholes, GarmanKohlhagen};
use crate::instruments::{DigitalOption, EquityOption, FxOption, OptionType};

/// Price a European equity option with Black-Scholes-Merton.
///
/// # Errors
/// `PricingError::InvalidInput` if the option's spot or strike is
/// non-positive.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::{EquityOption, OptionType};
/// use bspricer_models::pricing::price_equity_option;
///
/// let option = EquityOption::new(
///     100.0_f64, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call,
/// ).unwrap();
///
/// let price = price_equity_option(&option).unwrap();
/// assert!((price - 10.4506).abs() < 1e-3);
/// ```
pub fn price_equity_option<T: Float>(option: &EquityOption<T>) -> Result<T, PricingError> {
    let model = BlackScholes::new(
        option.spot,
        option.rate,
        option.dividend_yield,
        option.volatility,
    )?;
    Ok(model.price(option.option_type, option.strike, option.expiry))
}

/// Price a European FX option with Garman-Kohlhagen.
///
/// # Errors
/// `PricingError::InvalidInput` if the option's spot or strike is
/// non-positive.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::{FxOption, OptionType};
/// use bspricer_models::pricing::price_fx_option;
///
/// let option = FxOption::new(
///     1.10_f64, 1.12, 1.0, 0.03, 0.01, 0.15, OptionType::Call,
/// ).unwrap();
///
/// assert!(price_fx_option(&option).unwrap() > 0.0);
/// ```
pub fn price_fx_option<T: Float>(option: &FxOption<T>) -> Result<T, PricingError> {
    let model = GarmanKohlhagen::new(
        option.spot,
        option.rate_domestic,
        option.rate_foreign,
        option.volatility,
    )?;
    Ok(model.price(option.option_type, option.strike, option.expiry))
}

/// Price a cash-or-nothing digital option.
///
/// Standard case:
/// ```text
/// call: payout · e^(-rT) · N(d₂)
/// put:  payout · e^(-rT) · N(-d₂)
/// ```
/// with the Black-Scholes-Merton d₂. Expired or zero-volatility options
/// settle at the undiscounted payout when strictly in the money.
///
/// # Errors
/// `PricingError::InvalidInput` if spot or strike is non-positive.
pub fn price_digital_option<T: Float>(option: &DigitalOption<T>) -> Result<T, PricingError> {
    let zero = T::zero();

    if option.expiry <= zero || option.volatility <= zero {
        let in_the_money = match option.option_type {
            OptionType::Call => option.spot > option.strike,
            OptionType::Put => option.spot < option.strike,
        };
        return Ok(if in_the_money { option.payout } else { zero });
    }

    let model = BlackScholes::new(
        option.spot,
        option.rate,
        option.dividend_yield,
        option.volatility,
    )?;
    let d2 = model.d2(option.strike, option.expiry);
    let df = (-option.rate * option.expiry).exp();

    let probability = match option.option_type {
        OptionType::Call => norm_cdf(d2),
        OptionType::Put => norm_cdf(-d2),
    };

    Ok(option.payout * df * probability)
}
