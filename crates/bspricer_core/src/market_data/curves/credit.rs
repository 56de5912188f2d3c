//! Flat hazard rate credit curve implementation.

use super::CreditCurve;
use crate::market_data::error::MarketDataError;
use num_traits::Float;

/// Credit curve with a constant default intensity (hazard rate).
///
/// Under a constant hazard rate λ, the survival probability is
/// `S(t) = exp(-λ * t)`.
///
/// # Example
///
/// ```
/// use bspricer_core::market_data::curves::{CreditCurve, FlatHazardRateCurve};
///
/// let curve = FlatHazardRateCurve::new(0.02_f64).unwrap();
///
/// let survival = curve.survival_probability(1.0).unwrap();
/// assert!((survival - (-0.02_f64).exp()).abs() < 1e-12);
///
/// let default_prob = curve.default_probability(1.0).unwrap();
/// assert!((survival + default_prob - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlatHazardRateCurve<T: Float> {
    /// The constant default intensity λ
    hazard_rate: T,
}

impl<T: Float> FlatHazardRateCurve<T> {
    /// Construct a flat hazard rate curve.
    ///
    /// # Arguments
    ///
    /// * `hazard_rate` - Constant default intensity (must be >= 0)
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidHazardRate` if the hazard rate is negative.
    pub fn new(hazard_rate: T) -> Result<Self, MarketDataError> {
        if hazard_rate < T::zero() {
            return Err(MarketDataError::InvalidHazardRate {
                hazard_rate: hazard_rate.to_f64().unwrap_or(0.0),
            });
        }
        Ok(Self { hazard_rate })
    }

    /// Return the constant hazard rate.
    #[inline]
    pub fn hazard_rate(&self) -> T {
        self.hazard_rate
    }
}

impl<T: Float> CreditCurve<T> for FlatHazardRateCurve<T> {
    /// Return the survival probability `S(t) = exp(-λ * t)`.
    ///
    /// # Errors
    ///
    /// `MarketDataError::InvalidMaturity` if t < 0.
    fn survival_probability(&self, t: T) -> Result<T, MarketDataError> {
        if t < T::zero() {
            return Err(MarketDataError::InvalidMaturity {
                t: t.to_f64().unwrap_or(0.0),
            });
        }
        Ok((-self.hazard_rate * t).exp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_survival_at_zero_is_one() {
        let curve = FlatHazardRateCurve::new(0.02_f64).unwrap();
        assert_relative_eq!(curve.survival_probability(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_survival_five_years() {
        let curve = FlatHazardRateCurve::new(0.02_f64).unwrap();
        let s = curve.survival_probability(5.0).unwrap();
        assert_relative_eq!(s, (-0.1_f64).exp(), epsilon = 1e-15);
    }

    #[test]
    fn test_survival_non_increasing() {
        let curve = FlatHazardRateCurve::new(0.03_f64).unwrap();
        let mut prev = curve.survival_probability(0.0).unwrap();
        for i in 1..=20 {
            let s = curve.survival_probability(i as f64 * 0.5).unwrap();
            assert!(s <= prev);
            prev = s;
        }
    }

    #[test]
    fn test_default_probability_complement() {
        let curve = FlatHazardRateCurve::new(0.05_f64).unwrap();
        let s = curve.survival_probability(3.0).unwrap();
        let d = curve.default_probability(3.0).unwrap();
        assert_relative_eq!(s + d, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_zero_hazard_rate_never_defaults() {
        let curve = FlatHazardRateCurve::new(0.0_f64).unwrap();
        assert_relative_eq!(curve.survival_probability(100.0).unwrap(), 1.0);
    }

    #[test]
    fn test_negative_hazard_rate_rejected() {
        let result = FlatHazardRateCurve::new(-0.01_f64);
        assert!(result.is_err());
        match result.unwrap_err() {
            MarketDataError::InvalidHazardRate { hazard_rate } => {
                assert_eq!(hazard_rate, -0.01);
            }
            _ => panic!("Expected InvalidHazardRate error"),
        }
    }

    #[test]
    fn test_negative_horizon_rejected() {
        let curve = FlatHazardRateCurve::new(0.02_f64).unwrap();
        assert!(curve.survival_probability(-1.0).is_err());
    }
}
