//! Black-76 pricing model for European options on forwards.
//!
//! The Black-76 model prices options written directly on a forward price,
//! the standard convention for interest rate caps/floors, bond options,
//! and commodity options.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = e^(-rT)·(F·N(d₁) - K·N(d₂))
//! **Put Price**: P = e^(-rT)·(K·N(-d₂) - F·N(-d₁))
//!
//! Where:
//! - d₁ = (ln(F/K) + σ²T/2) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate cases
//!
//! When `expiry <= 0` or `volatility <= 0` the option settles at raw
//! intrinsic value against the forward, with no discounting.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Black-76 model for European options on a forward.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use bspricer_models::analytical::Black76;
///
/// let model = Black76::new(0.03_f64, 0.02, 0.2).unwrap();
/// let call = model.price_call(0.025, 1.0);
/// let put = model.price_put(0.025, 1.0);
///
/// // Put-call parity: C - P = e^(-rT)·(F - K)
/// let parity = call - put - (-0.02_f64).exp() * (0.03 - 0.025);
/// assert!(parity.abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Black76<T: Float> {
    /// Forward price (F)
    forward: T,
    /// Discount rate (r)
    rate: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> Black76<T> {
    /// Creates a new Black-76 model.
    ///
    /// # Arguments
    /// * `forward` - Forward price (must be positive)
    /// * `rate` - Continuously compounded discount rate (may be negative)
    /// * `volatility` - Annualised volatility; non-positive values route
    ///   pricing into the intrinsic-value branch
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidForward` if forward <= 0
    pub fn new(forward: T, rate: T, volatility: T) -> Result<Self, AnalyticalError> {
        if forward <= T::zero() {
            return Err(AnalyticalError::InvalidForward {
                forward: forward.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            forward,
            rate,
            volatility,
        })
    }

    /// Returns the forward price.
    #[inline]
    pub fn forward(&self) -> T {
        self.forward
    }

    /// Returns the discount rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    #[inline]
    fn is_degenerate(&self, expiry: T) -> bool {
        expiry <= T::zero() || self.volatility <= T::zero()
    }

    /// Computes the d1 term, d₁ = (ln(F/K) + σ²T/2) / (σ√T).
    #[inline]
    fn d1(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        ((self.forward / strike).ln() + half * self.volatility * self.volatility * expiry)
            / vol_sqrt_t
    }

    /// Computes the European call option price.
    ///
    /// Expired or zero-volatility options return `max(F - K, 0)` with no
    /// discounting.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return OptionType::Call.intrinsic(self.forward, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let df = (-self.rate * expiry).exp();

        df * (self.forward * norm_cdf(d1) - strike * norm_cdf(d2))
    }

    /// Computes the European put option price.
    ///
    /// Expired or zero-volatility options return `max(K - F, 0)` with no
    /// discounting.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return OptionType::Put.intrinsic(self.forward, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let df = (-self.rate * expiry).exp();

        df * (strike * norm_cdf(-d2) - self.forward * norm_cdf(-d1))
    }

    /// Prices an option of the given type.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }
}
