//! Curve trait definitions.

use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Generic yield curve trait for discount factor and rate calculations.
///
/// Implementations are generic over `T: Float` so the same curve can be
/// used with `f64` and `f32`.
///
/// # Contract
///
/// - `discount_factor(t)` returns the discount factor D(t) for maturity t
/// - `zero_rate(t)` returns the continuously compounded zero rate r(t)
///
/// # Invariants
///
/// - D(0) = 1
/// - D(t) > 0 for all t >= 0
///
/// # Example
///
/// ```
/// use bspricer_core::market_data::curves::{YieldCurve, FlatCurve};
///
/// let curve = FlatCurve::new(0.05_f64);
///
/// let df = curve.discount_factor(1.0).unwrap();
/// assert!((df - 0.951229).abs() < 1e-5);
///
/// let rate = curve.zero_rate(1.0).unwrap();
/// assert!((rate - 0.05).abs() < 1e-10);
/// ```
pub trait YieldCurve<T: Float> {
    /// Return the discount factor for maturity `t`.
    ///
    /// The discount factor D(t) is the present value of 1 unit of
    /// currency received at time t.
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be >= 0)
    ///
    /// # Returns
    ///
    /// * `Ok(D(t))` - Discount factor at time t
    /// * `Err(MarketDataError::InvalidMaturity)` - If t < 0
    fn discount_factor(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the continuously compounded zero rate for maturity `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Time to maturity in years (must be > 0)
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// r(t) = -ln(D(t)) / t
    /// ```
    fn zero_rate(&self, t: T) -> Result<T, MarketDataError> {
        if t <= T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        let df = self.discount_factor(t)?;
        Ok(-df.ln() / t)
    }
}

/// Generic credit curve trait for survival probability calculations.
///
/// # Contract
///
/// - `survival_probability(t)` returns S(t), the probability that the
///   reference entity survives beyond time t
/// - `default_probability(t)` returns 1 - S(t)
///
/// # Invariants
///
/// - S(0) = 1
/// - S(t) is non-increasing in t
///
/// # Example
///
/// ```
/// use bspricer_core::market_data::curves::{CreditCurve, FlatHazardRateCurve};
///
/// let curve = FlatHazardRateCurve::new(0.02_f64).unwrap();
///
/// let survival = curve.survival_probability(5.0).unwrap();
/// assert!((survival - (-0.1_f64).exp()).abs() < 1e-12);
/// ```
pub trait CreditCurve<T: Float> {
    /// Return the survival probability for horizon `t`.
    ///
    /// # Arguments
    ///
    /// * `t` - Time horizon in years (must be >= 0)
    ///
    /// # Returns
    ///
    /// * `Ok(S(t))` - Survival probability in (0, 1]
    /// * `Err(MarketDataError::InvalidMaturity)` - If t < 0
    fn survival_probability(&self, t: T) -> Result<T, MarketDataError>;

    /// Return the default probability for horizon `t`.
    ///
    /// # Default Implementation
    ///
    /// ```text
    /// P(default by t) = 1 - S(t)
    /// ```
    fn default_probability(&self, t: T) -> Result<T, MarketDataError> {
        Ok(T::one() - self.survival_probability(t)?)
    }
}
