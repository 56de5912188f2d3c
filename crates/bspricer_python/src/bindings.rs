//! PyO3 bindings for the bspricer pricing functions.
//!
//! Each binding validates through the instrument constructors and maps
//! the library errors onto Python `ValueError`.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use bspricer_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};
use bspricer_models::instruments::{
    CreditDefaultSwap, DigitalOption, EquityOption, FxOption, OptionType, RateOption,
};
use bspricer_models::pricing;

/// Parse an option type string, mapping rejection to `ValueError`.
fn parse_option_type(value: &str) -> PyResult<OptionType> {
    value
        .parse::<OptionType>()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Map a library error to `ValueError`.
fn value_error<E: std::fmt::Display>(e: E) -> PyErr {
    PyValueError::new_err(e.to_string())
}

// ============================================================================
// Closed-form option pricers
// ============================================================================

/// Price a European option with the Black-Scholes-Merton formula.
///
/// # Arguments
/// * `spot` - Current underlying price
/// * `strike` - Option strike
/// * `maturity` - Time to expiry in years
/// * `rate` - Continuously compounded risk-free rate
/// * `dividend_yield` - Continuous dividend yield
/// * `vol` - Volatility (annualised)
/// * `option_type` - "call" or "put" (case-insensitive)
///
/// # Returns
/// The option present value. If `maturity` or `vol` is non-positive the
/// option settles at intrinsic value.
///
/// # Raises
/// `ValueError` for non-positive spot or strike, or an unrecognised
/// option type.
#[pyfunction]
pub fn black_scholes_price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    option_type: &str,
) -> PyResult<f64> {
    let option_type = parse_option_type(option_type)?;
    let option = EquityOption::new(spot, strike, maturity, rate, dividend_yield, vol, option_type)
        .map_err(value_error)?;
    pricing::price_equity_option(&option).map_err(value_error)
}

/// Price a European option on a forward with the Black-76 formula.
///
/// # Arguments
/// * `forward` - Forward price of the underlying
/// * `strike` - Option strike
/// * `maturity` - Time to expiry in years
/// * `rate` - Discount rate to expiry
/// * `vol` - Volatility (annualised)
/// * `option_type` - "call" or "put" (case-insensitive)
#[pyfunction]
pub fn black76_price(
    forward: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    vol: f64,
    option_type: &str,
) -> PyResult<f64> {
    let option_type = parse_option_type(option_type)?;
    let option =
        RateOption::new(forward, strike, maturity, rate, vol, option_type).map_err(value_error)?;
    pricing::price_rate_option(&option).map_err(value_error)
}

/// Price an FX option with the Garman-Kohlhagen formula.
///
/// # Arguments
/// * `spot` - Current FX rate (domestic per foreign)
/// * `strike` - Option strike
/// * `maturity` - Time to expiry in years
/// * `rate_domestic` - Domestic risk-free rate
/// * `rate_foreign` - Foreign risk-free rate
/// * `vol` - Volatility (annualised)
/// * `option_type` - "call" or "put" (case-insensitive)
#[pyfunction]
pub fn garman_kohlhagen_price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate_domestic: f64,
    rate_foreign: f64,
    vol: f64,
    option_type: &str,
) -> PyResult<f64> {
    let option_type = parse_option_type(option_type)?;
    let option = FxOption::new(
        spot,
        strike,
        maturity,
        rate_domestic,
        rate_foreign,
        vol,
        option_type,
    )
    .map_err(value_error)?;
    pricing::price_fx_option(&option).map_err(value_error)
}

/// Price a cash-or-nothing digital option.
///
/// Pays `payout` at expiry if the option finishes in the money.
#[pyfunction]
pub fn digital_option_price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    dividend_yield: f64,
    vol: f64,
    payout: f64,
    option_type: &str,
) -> PyResult<f64> {
    let option_type = parse_option_type(option_type)?;
    let option = DigitalOption::new(
        spot,
        strike,
        maturity,
        rate,
        dividend_yield,
        vol,
        payout,
        option_type,
    )
    .map_err(value_error)?;
    pricing::price_digital_option(&option).map_err(value_error)
}

// ============================================================================
// Rates and credit
// ============================================================================

/// Present value of a zero-coupon bond on a flat discount curve.
#[pyfunction]
pub fn zero_coupon_price(face: f64, maturity: f64, rate: f64) -> PyResult<f64> {
    let curve = FlatCurve::new(rate);
    pricing::price_zero_coupon(face, maturity, &curve).map_err(value_error)
}

/// Present value of a CDS to the protection buyer on flat curves.
///
/// # Arguments
/// * `notional` - Contract notional
/// * `spread` - Contractual premium spread (decimal)
/// * `maturity` - Contract maturity in years
/// * `payment_frequency` - Premium payments per year (e.g. 4 for quarterly)
/// * `recovery_rate` - Assumed recovery on default, in [0, 1)
/// * `discount_rate` - Flat risk-free discount rate
/// * `hazard_rate` - Flat default intensity
#[pyfunction]
pub fn cds_price(
    notional: f64,
    spread: f64,
    maturity: f64,
    payment_frequency: u32,
    recovery_rate: f64,
    discount_rate: f64,
    hazard_rate: f64,
) -> PyResult<f64> {
    let cds = CreditDefaultSwap::new(notional, spread, maturity, payment_frequency, recovery_rate)
        .map_err(value_error)?;
    let discount = FlatCurve::new(discount_rate);
    let hazard = FlatHazardRateCurve::new(hazard_rate).map_err(value_error)?;
    pricing::price_cds(&cds, &discount, &hazard).map_err(value_error)
}

/// Break-even CDS spread on flat curves.
///
/// Takes the same market arguments as [`cds_price`]; the contractual
/// spread does not affect the result.
#[pyfunction]
pub fn fair_cds_spread(
    maturity: f64,
    payment_frequency: u32,
    recovery_rate: f64,
    discount_rate: f64,
    hazard_rate: f64,
) -> PyResult<f64> {
    let cds = CreditDefaultSwap::new(1.0, 0.0, maturity, payment_frequency, recovery_rate)
        .map_err(value_error)?;
    let discount = FlatCurve::new(discount_rate);
    let hazard = FlatHazardRateCurve::new(hazard_rate).map_err(value_error)?;
    pricing::fair_cds_spread(&cds, &discount, &hazard).map_err(value_error)
}
