//! # bspricer_models: Closed-Form Pricing Models and Instruments
//!
//! Analytic pricing for European derivatives.
//!
//! This crate provides:
//! - Closed-form models: Black-Scholes-Merton, Black-76, Garman-Kohlhagen
//! - Standard normal distribution helpers
//! - Instrument definitions (equity/FX/rate options, digital options, CDS)
//! - Instrument-level pricing functions over curve abstractions
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`** for `f64`/`f32` compatibility
//! - **Closed enumerations** for option types; unrecognised inputs fail
//!   rather than defaulting
//! - **Structured errors** via `thiserror`, converging on
//!   [`bspricer_core::types::PricingError`] at the pricing boundary
//!
//! ## Degenerate-case convention
//!
//! All option pricers settle expired (`expiry <= 0`) or zero-volatility
//! contracts at raw intrinsic value with no discounting. The standard branch
//! discounts as usual.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod pricing;
