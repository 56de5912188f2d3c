//! Black-Scholes-Merton pricing model for European options.
//!
//! This module provides the Black-Scholes-Merton model for pricing
//! European call and put options on an underlying paying a continuous
//! dividend yield.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate cases
//!
//! When `expiry <= 0` or `volatility <= 0` the option settles at raw
//! intrinsic value, `max(S - K, 0)` for calls and `max(K - S, 0)` for puts,
//! with no discounting applied in that branch.

use num_traits::Float;

use super::distributions::norm_cdf;
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Black-Scholes-Merton model for European option pricing.
///
/// Holds the market state (spot, rates, volatility); strike and expiry are
/// per-call arguments so one model instance can price a whole strike ladder.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`)
///
/// # Examples
/// ```
/// use bspricer_models::analytical::BlackScholes;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
/// let call = bs.price_call(100.0, 1.0);
/// let put = bs.price_put(100.0, 1.0);
///
/// // Put-call parity: C - P = S·e^(-qT) - K·e^(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Continuous dividend yield (q)
    dividend_yield: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes-Merton model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised, may be negative)
    /// * `dividend_yield` - Continuous dividend yield (may be negative)
    /// * `volatility` - Annualised volatility; non-positive values are
    ///   accepted and route pricing into the intrinsic-value branch
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    ///
    /// # Examples
    /// ```
    /// use bspricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.02, 0.2);
    /// assert!(bs.is_ok());
    ///
    /// // Invalid spot
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.0, 0.2).is_err());
    ///
    /// // Zero volatility is allowed (intrinsic-value pricing)
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.0, 0.0).is_ok());
    /// ```
    pub fn new(
        spot: T,
        rate: T,
        dividend_yield: T,
        volatility: T,
    ) -> Result<Self, AnalyticalError> {
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(0.0),
            });
        }

        Ok(Self {
            spot,
            rate,
            dividend_yield,
            volatility,
        })
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns `true` when the option must settle at intrinsic value.
    #[inline]
    fn is_degenerate(&self, expiry: T) -> bool {
        expiry <= T::zero() || self.volatility <= T::zero()
    }

    /// Computes the d1 term of the Black-Scholes-Merton formula.
    ///
    /// d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Returns
    /// The d1 term. In the degenerate regime (expiry or volatility <= 0)
    /// returns a large value whose sign follows the moneyness.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            let large = T::from(100.0).unwrap();
            return if self.spot > strike {
                large
            } else if self.spot < strike {
                -large
            } else {
                T::zero()
            };
        }

        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();

        let log_moneyness = (self.spot / strike).ln();
        let drift =
            (self.rate - self.dividend_yield + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Computes the d2 term, d₂ = d₁ - σ√T.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return self.d1(strike, expiry);
        }

        self.d1(strike, expiry) - self.volatility * expiry.sqrt()
    }

    /// Computes the European call option price.
    ///
    /// C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
    ///
    /// Expired or zero-volatility options return `max(S - K, 0)` with no
    /// discounting.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Examples
    /// ```
    /// use bspricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
    /// let price = bs.price_call(100.0, 1.0);
    /// assert!((price - 10.4506).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return OptionType::Call.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend_yield * expiry).exp();

        self.spot * df_q * norm_cdf(d1) - strike * df_r * norm_cdf(d2)
    }

    /// Computes the European put option price.
    ///
    /// P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
    ///
    /// Expired or zero-volatility options return `max(K - S, 0)` with no
    /// discounting.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    ///
    /// # Examples
    /// ```
    /// use bspricer_models::analytical::BlackScholes;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
    /// let price = bs.price_put(100.0, 1.0);
    /// assert!((price - 5.5735).abs() < 1e-3);
    /// ```
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        if self.is_degenerate(expiry) {
            return OptionType::Put.intrinsic(self.spot, strike);
        }

        let d1 = self.d1(strike, expiry);
        let d2 = self.d2(strike, expiry);

        let df_r = (-self.rate * expiry).exp();
        let df_q = (-self.dividend_yield * expiry).exp();

        strike * df_r * norm_cdf(-d2) - self.spot * df_q * norm_cdf(-d1)
    }

    /// Prices an option of the given type.
    ///
    /// Dispatches to [`price_call`](Self::price_call) or
    /// [`price_put`](Self::price_put) on the closed [`OptionType`]
    /// enumeration.
    ///
    /// # Examples
    /// ```
    /// use bspricer_models::analytical::BlackScholes;
    /// use bspricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
    /// let call = bs.price(OptionType::Call, 100.0, 1.0);
    /// let put = bs.price(OptionType::Put, 100.0, 1.0);
    /// assert!(call > put);
    /// ```
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        match option_type {
            OptionType::Call => self.price_call(strike, expiry),
            OptionType::Put => self.price_put(strike, expiry),
        }
    }
}
