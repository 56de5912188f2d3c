//! Garman-Kohlhagen model for FX option pricing.
//!
//! The Garman-Kohlhagen formula extends Black-Scholes-Merton to currency
//! options by discounting the foreign leg at the foreign risk-free rate:
//! it is Black-Scholes-Merton with the dividend yield replaced by the
//! foreign rate.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-r_f·T)·N(d₁) - K·e^(-r_d·T)·N(d₂)
//! **Put Price**: P = K·e^(-r_d·T)·N(-d₂) - S·e^(-r_f·T)·N(-d₁)
//!
//! where r_d and r_f are the domestic and foreign risk-free rates and
//! d₁ = (ln(S/K) + (r_d - r_f + σ²/2)T) / (σ√T).

use num_traits::Float;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// Garman-Kohlhagen model for European FX option pricing.
///
/// Wraps [`BlackScholes`] with the domestic rate as the risk-free rate and
/// the foreign rate as the carry, inheriting its degenerate-case
/// convention (undiscounted intrinsic on `expiry <= 0` or `vol <= 0`).
///
/// # Examples
/// ```
/// use bspricer_models::analytical::GarmanKohlhagen;
///
/// // EURUSD at 1.10, domestic 3%, foreign 1%, vol 15%
/// let model = GarmanKohlhagen::new(1.10_f64, 0.03, 0.01, 0.15).unwrap();
/// let call = model.price_call(1.12, 1.0);
/// let put = model.price_put(1.12, 1.0);
///
/// // Put-call parity: C - P = S·e^(-r_f·T) - K·e^(-r_d·T)
/// let parity = call - put
///     - (1.10 * (-0.01_f64).exp() - 1.12 * (-0.03_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct GarmanKohlhagen<T: Float> {
    inner: BlackScholes<T>,
}

impl<T: Float> GarmanKohlhagen<T> {
    /// Creates a new Garman-Kohlhagen model.
    ///
    /// # Arguments
    /// * `spot` - Spot exchange rate, domestic per foreign (must be positive)
    /// * `rate_domestic` - Domestic risk-free rate (may be negative)
    /// * `rate_foreign` - Foreign risk-free rate (may be negative)
    /// * `volatility` - Annualised volatility of the exchange rate
    ///
    /// # Errors
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    pub fn new(
        spot: T,
        rate_domestic: T,
        rate_foreign: T,
        volatility: T,
    ) -> Result<Self, AnalyticalError> {
        Ok(Self {
            inner: BlackScholes::new(spot, rate_domestic, rate_foreign, volatility)?,
        })
    }

    /// Returns the spot exchange rate.
    #[inline]
    pub fn spot(&self) -> T {
        self.inner.spot()
    }

    /// Returns the domestic risk-free rate.
    #[inline]
    pub fn rate_domestic(&self) -> T {
        self.inner.rate()
    }

    /// Returns the foreign risk-free rate.
    #[inline]
    pub fn rate_foreign(&self) -> T {
        self.inner.dividend_yield()
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.inner.volatility()
    }

    /// Computes the European FX call option price.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> T {
        self.inner.price_call(strike, expiry)
    }

    /// Computes the European FX put option price.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> T {
        self.inner.price_put(strike, expiry)
    }

    /// Prices an option of the given type.
    #[inline]
    pub fn price(&self, option_type: OptionType, strike: T, expiry: T) -> T {
        self.inner.price(option_type, strike, expiry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_invalid_spot() {
        let result = GarmanKohlhagen::new(0.0_f64, 0.03, 0.01, 0.15);
        assert!(matches!(
            result.unwrap_err(),
            AnalyticalError::InvalidSpot { .. }
        ));
    }

    #[test]
    fn test_accessors() {
        let model = GarmanKohlhagen::new(1.10_f64, 0.03, 0.01, 0.15).unwrap();
        assert_eq!(model.spot(), 1.10);
        assert_eq!(model.rate_domestic(), 0.03);
        assert_eq!(model.rate_foreign(), 0.01);
        assert_eq!(model.volatility(), 0.15);
    }

    #[test]
    fn test_put_call_parity_fx() {
        // C - P = S·e^(-r_f·T) - K·e^(-r_d·T)
        let model = GarmanKohlhagen::new(1.10_f64, 0.03, 0.01, 0.15).unwrap();
        for strike in [1.00, 1.05, 1.10, 1.15, 1.20] {
            let call = model.price_call(strike, 1.0);
            let put = model.price_put(strike, 1.0);
            let parity = 1.10 * (-0.01_f64).exp() - strike * (-0.03_f64).exp();
            assert_relative_eq!(call - put, parity, epsilon = 1e-10);
        }
    }

    #[test]
    fn test_matches_black_scholes_with_foreign_rate_as_yield() {
        let gk = GarmanKohlhagen::new(1.25_f64, 0.04, 0.02, 0.12).unwrap();
        let bs = crate::analytical::BlackScholes::new(1.25_f64, 0.04, 0.02, 0.12).unwrap();
        assert_relative_eq!(gk.price_call(1.30, 0.75), bs.price_call(1.30, 0.75));
        assert_relative_eq!(gk.price_put(1.30, 0.75), bs.price_put(1.30, 0.75));
    }

    #[test]
    fn test_degenerate_settles_at_intrinsic() {
        let model = GarmanKohlhagen::new(1.15_f64, 0.03, 0.01, 0.15).unwrap();
        assert_relative_eq!(model.price_call(1.10, 0.0), 0.05, epsilon = 1e-12);
        assert_eq!(model.price_put(1.10, 0.0), 0.0);
    }

    #[test]
    fn test_equal_rates_degenerate_to_plain_carry_free_model() {
        // r_d = r_f: the forward equals spot, so ATM call and put coincide
        let model = GarmanKohlhagen::new(1.00_f64, 0.02, 0.02, 0.10).unwrap();
        let call = model.price_call(1.00, 1.0);
        let put = model.price_put(1.00, 1.0);
        assert_relative_eq!(call, put, epsilon = 1e-10);
    }
}
