//! Yield and credit curves.
//!
//! This module provides:
//! - [`YieldCurve`]: discount factor and zero rate trait
//! - [`CreditCurve`]: survival probability trait
//! - [`FlatCurve`]: constant-rate yield curve
//! - [`FlatHazardRateCurve`]: constant-intensity credit curve

pub mod credit;
pub mod flat;
pub mod traits;

pub use credit::FlatHazardRateCurve;
pub use flat::FlatCurve;
pub use traits::{CreditCurve, YieldCurve};
