//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes-Merton model with continuous dividend yield
//! - Black-76 model for options on forwards
//! - Garman-Kohlhagen model for FX options
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: supports `f64` and `f32`
//! - **Numerical Stability**: erf-based normal CDF with exact symmetry
//! - **Uniform degenerate handling**: expired or zero-volatility options
//!   settle at undiscounted intrinsic value

pub mod black76;
pub mod black_scholes;
pub mod distributions;
pub mod error;
pub mod garman_kohlhagen;

// Re-export main types at module level
pub use black76::Black76;
pub use black_scholes::BlackScholes;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use garman_kohlhagen::GarmanKohlhagen;
