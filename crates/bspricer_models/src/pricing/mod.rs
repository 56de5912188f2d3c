//! Instrument-level pricing functions.
//!
//! Thin orchestration over the analytical models:
//! - [`analytics`]: equity, FX, and digital option pricing
//! - [`rates`]: rate options, zero-coupon bonds, and swap valuation
//! - [`credit`]: CDS valuation and par spreads
//!
//! All functions return `Result<T, PricingError>`, converting layer
//! errors at this boundary.

pub mod analytics;
pub mod credit;
pub mod rates;

pub use analytics::{price_digital_option, price_equity_option, price_fx_option};
pub use credit::{fair_cds_spread, price_cds};
pub use rates::{
    par_swap_rate, price_fixed_floating_swap, price_rate_option, price_zero_coupon, swap_annuity,
};
