//! Rates pricing: forward options, zero-coupon bonds, and vanilla swaps.
//!
//! Swap valuation uses equally weighted accruals against a discount
//! curve. Empty schedules value to zero rather than failing, matching
//! the convention of the other degenerate branches in this library.

use bspricer_core::market_data::curves::YieldCurve;
use bspricer_core::types::PricingError;
use num_traits::Float;

use crate::analytical::Black76;
use crate::instruments::RateOption;

/// Price a European option on a forward rate with Black-76.
///
/// # Errors
/// `PricingError::InvalidInput` if the option's forward or strike is
/// non-positive.
///
/// # Examples
/// ```
/// use bspricer_models::instruments::{RateOption, OptionType};
/// use bspricer_models::pricing::price_rate_option;
///
/// let option = RateOption::new(
///     0.03_f64, 0.025, 1.0, 0.02, 0.2, OptionType::Call,
/// ).unwrap();
///
/// assert!(price_rate_option(&option).unwrap() > 0.0);
/// ```
pub fn price_rate_option<T: Float>(option: &RateOption<T>) -> Result<T, PricingError> {
    let model = Black76::new(option.forward, option.discount_rate, option.volatility)
        .map_err(PricingError::from)?;
    Ok(model.price(option.option_type, option.strike, option.expiry))
}

/// Present value of a zero-coupon bond paying `face` at `maturity`.
///
/// # Errors
/// `PricingError::InvalidInput` if the maturity is negative.
///
/// # Examples
/// ```
/// use bspricer_core::market_data::curves::FlatCurve;
/// use bspricer_models::pricing::price_zero_coupon;
///
/// let curve = FlatCurve::new(0.05_f64);
/// let pv = price_zero_coupon(100.0, 1.0, &curve).unwrap();
/// assert!((pv - 100.0 * (-0.05_f64).exp()).abs() < 1e-10);
/// ```
pub fn price_zero_coupon<T: Float, C: YieldCurve<T>>(
    face: T,
    maturity: T,
    curve: &C,
) -> Result<T, PricingError> {
    Ok(face * curve.discount_factor(maturity)?)
}

/// Discounted annuity of a fixed payment schedule.
///
/// `A = Σᵢ D(tᵢ) · accrual` over the payment times.
///
/// # Errors
/// `PricingError::InvalidInput` if any payment time is negative.
pub fn swap_annuity<T: Float, C: YieldCurve<T>>(
    curve: &C,
    payment_times: &[T],
    accrual: T,
) -> Result<T, PricingError> {
    let mut annuity = T::zero();
    for &t in payment_times {
        annuity = annuity + curve.discount_factor(t)? * accrual;
    }
    Ok(annuity)
}

/// Par swap rate for a fixed payment schedule.
///
/// `s = (1 - D(t_n)) / A`, the fixed rate that values a fixed-for-floating
/// swap at zero. Returns zero for an empty schedule or a non-positive
/// annuity.
///
/// # Errors
/// `PricingError::InvalidInput` if any payment time is negative.
///
/// # Examples
/// ```
/// use bspricer_core::market_data::curves::FlatCurve;
/// use bspricer_models::pricing::par_swap_rate;
///
/// let curve = FlatCurve::new(0.05_f64);
/// let times: Vec<f64> = (1..=10).map(|i| i as f64 * 0.5).collect();
/// let par = par_swap_rate(&curve, &times, 0.5).unwrap();
///
/// // Par rate sits close to the curve rate
/// assert!((par - 0.05).abs() < 0.01);
/// ```
pub fn par_swap_rate<T: Float, C: YieldCurve<T>>(
    curve: &C,
    payment_times: &[T],
    accrual: T,
) -> Result<T, PricingError> {
    let last = match payment_times.last() {
        Some(&t) => t,
        None => return Ok(T::zero()),
    };

    let annuity = swap_annuity(curve, payment_times, accrual)?;
    if annuity <= T::zero() {
        return Ok(T::zero());
    }

    Ok((T::one() - curve.discount_factor(last)?) / annuity)
}

/// Present value of a fixed-for-floating swap to the floating receiver.
///
/// ```text
/// PV = notional · (1 - D(t_n)) - fixed_rate · A · notional
/// ```
/// The floating leg is valued as par minus the final discount bond.
/// Returns zero for an empty schedule.
///
/// # Errors
/// `PricingError::InvalidInput` if any payment time is negative.
pub fn price_fixed_floating_swap<T: Float, C: YieldCurve<T>>(
    fixed_rate: T,
    notional: T,
    curve: &C,
    payment_times: &[T],
    accrual: T,
) -> Result<T, PricingError> {
    let last = match payment_times.last() {
        Some(&t) => t,
        None => return Ok(T::zero()),
    };

    let fixed_leg = fixed_rate * swap_annuity(curve, payment_times, accrual)? * notional;
    let float_leg = notional * (T::one() - curve.discount_factor(last)?);

    Ok(float_leg - fixed_leg)
}
