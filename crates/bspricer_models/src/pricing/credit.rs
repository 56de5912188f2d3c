//! Credit default swap pricing on reduced-form survival curves.
//!
//! Both legs are valued on the contract's payment grid. Default is
//! assumed to settle at the end of the accrual period in which it
//! occurs, so no accrued-premium adjustment is applied.

use bspricer_core::market_data::curves::{CreditCurve, YieldCurve};
use bspricer_core::types::PricingError;
use num_traits::Float;

use crate::instruments::CreditDefaultSwap;

/// Present value of a CDS to the protection buyer.
///
/// ```text
/// premium    = s · Σᵢ Δt · D(tᵢ) · S(tᵢ)
/// protection = (1 - R) · Σᵢ D(tᵢ) · (S(tᵢ₋₁) - S(tᵢ))
/// PV         = notional · (protection - premium)
/// ```
/// where `S` is the survival probability and `R` the recovery rate.
/// A positive value means the contractual spread underpays for the
/// protection received.
///
/// # Errors
/// `PricingError::InvalidInput` if either curve rejects a payment time.
///
/// # Examples
/// ```
/// use bspricer_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};
/// use bspricer_models::instruments::CreditDefaultSwap;
/// use bspricer_models::pricing::price_cds;
///
/// let cds = CreditDefaultSwap::new(1_000_000.0_f64, 0.01, 5.0, 4, 0.4).unwrap();
/// let discount = FlatCurve::new(0.03);
/// let hazard = FlatHazardRateCurve::new(0.02).unwrap();
///
/// let pv = price_cds(&cds, &discount, &hazard).unwrap();
/// assert!(pv.is_finite());
/// ```
pub fn price_cds<T, D, S>(
    cds: &CreditDefaultSwap<T>,
    discount_curve: &D,
    credit_curve: &S,
) -> Result<T, PricingError>
where
    T: Float,
    D: YieldCurve<T>,
    S: CreditCurve<T>,
{
    let (premium, protection) = leg_values(cds, discount_curve, credit_curve)?;
    Ok(cds.notional * (protection - cds.spread * premium))
}

/// Fair (break-even) CDS spread.
///
/// The spread that sets the contract's present value to zero:
/// protection leg divided by the risky annuity. Returns zero when the
/// annuity is non-positive, which happens for an immediate-default
/// survival curve.
///
/// # Errors
/// `PricingError::InvalidInput` if either curve rejects a payment time.
pub fn fair_cds_spread<T, D, S>(
    cds: &CreditDefaultSwap<T>,
    discount_curve: &D,
    credit_curve: &S,
) -> Result<T, PricingError>
where
    T: Float,
    D: YieldCurve<T>,
    S: CreditCurve<T>,
{
    let (annuity, protection) = leg_values(cds, discount_curve, credit_curve)?;
    if annuity <= T::zero() {
        return Ok(T::zero());
    }
    Ok(protection / annuity)
}

/// Per-unit-notional risky annuity and protection leg on the payment grid.
fn leg_values<T, D, S>(
    cds: &CreditDefaultSwap<T>,
    discount_curve: &D,
    credit_curve: &S,
) -> Result<(T, T), PricingError>
where
    T: Float,
    D: YieldCurve<T>,
    S: CreditCurve<T>,
{
    let (payment_times, accrual) = cds.payment_schedule();
    let loss = T::one() - cds.recovery_rate;

    let mut annuity = T::zero();
    let mut protection = T::zero();
    let mut survival_prev = T::one();

    for &t in &payment_times {
        let df = discount_curve.discount_factor(t)?;
        let survival = credit_curve.survival_probability(t)?;

        annuity = annuity + accrual * df * survival;
        protection = protection + loss * df * (survival_prev - survival);
        survival_prev = survival;
    }

    Ok((annuity, protection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bspricer_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};

    fn standard_cds(spread: f64) -> CreditDefaultSwap<f64> {
        CreditDefaultSwap::new(1_000_000.0, spread, 5.0, 4, 0.4).unwrap()
    }

    #[test]
    fn test_cds_pv_finite_and_signed() {
        let discount = FlatCurve::new(0.03_f64);
        let hazard = FlatHazardRateCurve::new(0.02).unwrap();

        // Fair spread for lambda=0.02, R=0.4 is roughly (1-R)*lambda = 120bp,
        // so a 100bp contract is cheap protection
        let pv = price_cds(&standard_cds(0.01), &discount, &hazard).unwrap();
        assert!(pv > 0.0);

        // and a 200bp contract overpays
        let pv = price_cds(&standard_cds(0.02), &discount, &hazard).unwrap();
        assert!(pv < 0.0);
    }

    #[test]
    fn test_fair_spread_near_credit_triangle() {
        // (1 - R) * lambda approximates the fair spread on flat curves
        let discount = FlatCurve::new(0.03_f64);
        let hazard = FlatHazardRateCurve::new(0.02).unwrap();

        let fair = fair_cds_spread(&standard_cds(0.01), &discount, &hazard).unwrap();
        assert!((fair - 0.6 * 0.02).abs() < 0.001);
    }

    #[test]
    fn test_contract_at_fair_spread_has_zero_value() {
        let discount = FlatCurve::new(0.03_f64);
        let hazard = FlatHazardRateCurve::new(0.02).unwrap();

        let fair = fair_cds_spread(&standard_cds(0.01), &discount, &hazard).unwrap();
        let pv = price_cds(&standard_cds(fair), &discount, &hazard).unwrap();
        assert_relative_eq!(pv, 0.0, epsilon = 1e-4);
    }

    #[test]
    fn test_riskless_reference_pays_no_protection() {
        let discount = FlatCurve::new(0.03_f64);
        let hazard = FlatHazardRateCurve::new(0.0).unwrap();

        let fair = fair_cds_spread(&standard_cds(0.01), &discount, &hazard).unwrap();
        assert_relative_eq!(fair, 0.0, epsilon = 1e-12);

        // Buying protection on a riskless name just pays the premium leg
        let pv = price_cds(&standard_cds(0.01), &discount, &hazard).unwrap();
        assert!(pv < 0.0);
    }

    #[test]
    fn test_fair_spread_increases_with_hazard() {
        let discount = FlatCurve::new(0.03_f64);
        let cds = standard_cds(0.01);

        let low = fair_cds_spread(&cds, &discount, &FlatHazardRateCurve::new(0.01).unwrap());
        let high = fair_cds_spread(&cds, &discount, &FlatHazardRateCurve::new(0.05).unwrap());
        assert!(high.unwrap() > low.unwrap());
    }

    #[test]
    fn test_higher_recovery_lowers_fair_spread() {
        let discount = FlatCurve::new(0.03_f64);
        let hazard = FlatHazardRateCurve::new(0.02).unwrap();

        let low_recovery = CreditDefaultSwap::new(1.0_f64, 0.01, 5.0, 4, 0.2).unwrap();
        let high_recovery = CreditDefaultSwap::new(1.0_f64, 0.01, 5.0, 4, 0.6).unwrap();

        let s_low = fair_cds_spread(&low_recovery, &discount, &hazard).unwrap();
        let s_high = fair_cds_spread(&high_recovery, &discount, &hazard).unwrap();
        assert!(s_low > s_high);
    }
}
