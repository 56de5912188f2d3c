//! # bspricer_core: Foundation for the bspricer analytic pricing library
//!
//! The bottom layer of the workspace, providing:
//! - Yield and credit curve traits with flat implementations (`market_data`)
//! - Structured error types: `PricingError`, `MarketDataError` (`types`)
//!
//! ## Zero Dependency Principle
//!
//! This crate has no dependencies on other bspricer crates and a minimal
//! external footprint:
//! - num-traits: generic numerical computation
//! - thiserror: structured error types
//! - serde: serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use bspricer_core::market_data::curves::{FlatCurve, YieldCurve};
//!
//! let curve = FlatCurve::new(0.05_f64);
//! let df = curve.discount_factor(1.0).unwrap();
//! assert!((df - 0.951229).abs() < 1e-5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): enable serialisation for curve types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod types;
