//! Python bindings for the bspricer analytical pricing library.
//!
//! Exposes the closed-form pricers as plain functions taking scalar
//! arguments, suitable for notebook and scripting workflows.
//!
//! # Usage
//!
//! ```python
//! import bspricer
//!
//! price = bspricer.black_scholes_price(
//!     spot=100.0,
//!     strike=100.0,
//!     maturity=1.0,
//!     rate=0.05,
//!     dividend_yield=0.0,
//!     vol=0.2,
//!     option_type="call",
//! )
//! print(f"Option price: {price:.4f}")
//! ```
//!
//! Invalid inputs (non-positive prices, unrecognised option types) raise
//! `ValueError` rather than returning sentinel values.

use pyo3::prelude::*;

mod bindings;

/// Black-Scholes-Merton analytical pricing for Python
#[pymodule]
fn bspricer(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Closed-form option pricers
    m.add_function(wrap_pyfunction!(bindings::black_scholes_price, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::black76_price, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::garman_kohlhagen_price, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::digital_option_price, m)?)?;

    // Rates and credit
    m.add_function(wrap_pyfunction!(bindings::zero_coupon_price, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::cds_price, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::fair_cds_spread, m)?)?;

    // Utilities
    m.add_function(wrap_pyfunction!(version, m)?)?;

    Ok(())
}

/// Get the bspricer library version
#[pyfunction]
fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
