//! Cross-module integration tests exercising the public pricing API
//! end to end: instruments built at the boundary, curves from
//! `bspricer_core`, and textbook reference values.

use approx::assert_relative_eq;
use bspricer_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};
use bspricer_models::instruments::{
    CreditDefaultSwap, DigitalOption, EquityOption, FxOption, OptionType, RateOption,
};
use bspricer_models::pricing::{
    fair_cds_spread, par_swap_rate, price_cds, price_digital_option, price_equity_option,
    price_fixed_floating_swap, price_fx_option, price_rate_option, price_zero_coupon,
};

#[test]
fn equity_option_textbook_values() {
    // S=100, K=100, T=1, r=5%, q=0, sigma=20%
    let call = EquityOption::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
    let put = EquityOption::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, OptionType::Put).unwrap();

    assert_relative_eq!(price_equity_option(&call).unwrap(), 10.4506, epsilon = 1e-4);
    assert_relative_eq!(price_equity_option(&put).unwrap(), 5.5735, epsilon = 1e-4);
}

#[test]
fn equity_option_put_call_parity() {
    let strike = 95.0;
    let call = EquityOption::new(100.0, strike, 0.75, 0.03, 0.01, 0.25, OptionType::Call).unwrap();
    let put = EquityOption::new(100.0, strike, 0.75, 0.03, 0.01, 0.25, OptionType::Put).unwrap();

    let lhs = price_equity_option(&call).unwrap() - price_equity_option(&put).unwrap();
    let rhs = 100.0 * (-0.01_f64 * 0.75).exp() - strike * (-0.03_f64 * 0.75).exp();
    assert_relative_eq!(lhs, rhs, epsilon = 1e-9);
}

#[test]
fn expired_equity_option_settles_at_intrinsic() {
    let call = EquityOption::new(110.0, 100.0, 0.0, 0.05, 0.0, 0.2, OptionType::Call).unwrap();
    assert_eq!(price_equity_option(&call).unwrap(), 10.0);

    let put = EquityOption::new(110.0, 100.0, 0.0, 0.05, 0.0, 0.2, OptionType::Put).unwrap();
    assert_eq!(price_equity_option(&put).unwrap(), 0.0);
}

#[test]
fn option_type_parsed_at_the_boundary() {
    assert_eq!("call".parse::<OptionType>().unwrap(), OptionType::Call);
    assert_eq!("PUT".parse::<OptionType>().unwrap(), OptionType::Put);
    assert!("straddle".parse::<OptionType>().is_err());
}

#[test]
fn fx_option_respects_interest_rate_parity() {
    let call = FxOption::new(1.10, 1.05, 0.5, 0.03, 0.01, 0.1, OptionType::Call).unwrap();
    let put = FxOption::new(1.10, 1.05, 0.5, 0.03, 0.01, 0.1, OptionType::Put).unwrap();

    let lhs = price_fx_option(&call).unwrap() - price_fx_option(&put).unwrap();
    let rhs = 1.10 * (-0.01_f64 * 0.5).exp() - 1.05 * (-0.03_f64 * 0.5).exp();
    assert_relative_eq!(lhs, rhs, epsilon = 1e-9);
}

#[test]
fn digital_pair_sums_to_discounted_payout() {
    let call =
        DigitalOption::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, 10.0, OptionType::Call).unwrap();
    let put = DigitalOption::new(100.0, 100.0, 1.0, 0.05, 0.0, 0.2, 10.0, OptionType::Put).unwrap();

    let total = price_digital_option(&call).unwrap() + price_digital_option(&put).unwrap();
    assert_relative_eq!(total, 10.0 * (-0.05_f64).exp(), epsilon = 1e-9);
}

#[test]
fn rate_option_on_forward_is_positive_in_the_money() {
    let option = RateOption::new(0.03, 0.025, 1.0, 0.02, 0.2, OptionType::Call).unwrap();
    let price = price_rate_option(&option).unwrap();
    assert!(price > 0.0);
    // Bounded above by the discounted forward
    assert!(price < 0.03 * (-0.02_f64).exp());
}

#[test]
fn swap_struck_at_par_values_to_zero() {
    let curve = FlatCurve::new(0.04_f64);
    let times: Vec<f64> = (1..=20).map(|i| i as f64 * 0.5).collect();

    let par = par_swap_rate(&curve, &times, 0.5).unwrap();
    let pv = price_fixed_floating_swap(par, 10_000_000.0, &curve, &times, 0.5).unwrap();
    assert_relative_eq!(pv, 0.0, epsilon = 1e-5);
}

#[test]
fn zero_coupon_consistent_with_curve() {
    let curve = FlatCurve::new(0.04_f64);
    let pv = price_zero_coupon(100.0, 3.0, &curve).unwrap();
    assert_relative_eq!(pv, 100.0 * (-0.12_f64).exp(), epsilon = 1e-12);
}

#[test]
fn cds_at_fair_spread_values_to_zero() {
    let discount = FlatCurve::new(0.03_f64);
    let hazard = FlatHazardRateCurve::new(0.025).unwrap();

    let quoted = CreditDefaultSwap::new(1_000_000.0, 0.01, 5.0, 4, 0.4).unwrap();
    let fair = fair_cds_spread(&quoted, &discount, &hazard).unwrap();

    let repriced = CreditDefaultSwap::new(1_000_000.0, fair, 5.0, 4, 0.4).unwrap();
    let pv = price_cds(&repriced, &discount, &hazard).unwrap();
    assert!(pv.abs() < 1e-4);
}
