//! Criterion benchmarks for the analytical pricing models.
//!
//! Measures single-price throughput for the closed-form models and the
//! schedule-based swap and CDS calculators at realistic contract sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bspricer_core::market_data::curves::{FlatCurve, FlatHazardRateCurve};
use bspricer_models::analytical::{norm_cdf, Black76, BlackScholes, GarmanKohlhagen};
use bspricer_models::instruments::{CreditDefaultSwap, OptionType};
use bspricer_models::pricing::{fair_cds_spread, price_cds, price_fixed_floating_swap};

/// Benchmark the normal CDF approximation in isolation.
fn bench_norm_cdf(c: &mut Criterion) {
    c.bench_function("norm_cdf", |b| {
        b.iter(|| norm_cdf(black_box(0.35_f64)));
    });
}

/// Benchmark single vanilla prices across the closed-form models.
fn bench_closed_form_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("closed_form_price");

    let bs = BlackScholes::new(100.0_f64, 0.05, 0.0, 0.2).unwrap();
    group.bench_function("black_scholes_call", |b| {
        b.iter(|| bs.price(black_box(OptionType::Call), black_box(100.0), black_box(1.0)));
    });
    group.bench_function("black_scholes_put", |b| {
        b.iter(|| bs.price(black_box(OptionType::Put), black_box(100.0), black_box(1.0)));
    });

    let b76 = Black76::new(0.03_f64, 0.02, 0.2).unwrap();
    group.bench_function("black76_call", |b| {
        b.iter(|| b76.price(black_box(OptionType::Call), black_box(0.025), black_box(1.0)));
    });

    let gk = GarmanKohlhagen::new(1.10_f64, 0.03, 0.01, 0.1).unwrap();
    group.bench_function("garman_kohlhagen_call", |b| {
        b.iter(|| gk.price(black_box(OptionType::Call), black_box(1.05), black_box(0.5)));
    });

    group.finish();
}

/// Benchmark swap valuation as the schedule length grows.
fn bench_swap_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap_pv");
    let curve = FlatCurve::new(0.04_f64);

    for years in [5u32, 10, 30] {
        let times: Vec<f64> = (1..=years * 2).map(|i| i as f64 * 0.5).collect();
        group.bench_with_input(BenchmarkId::from_parameter(years), &times, |b, times| {
            b.iter(|| {
                price_fixed_floating_swap(
                    black_box(0.035),
                    black_box(1_000_000.0),
                    &curve,
                    times,
                    black_box(0.5),
                )
                .unwrap()
            });
        });
    }

    group.finish();
}

/// Benchmark CDS valuation and fair-spread solving on a quarterly grid.
fn bench_cds_pricing(c: &mut Criterion) {
    let mut group = c.benchmark_group("cds");

    let discount = FlatCurve::new(0.03_f64);
    let hazard = FlatHazardRateCurve::new(0.02).unwrap();

    for maturity in [5.0_f64, 10.0] {
        let cds = CreditDefaultSwap::new(1_000_000.0, 0.01, maturity, 4, 0.4).unwrap();

        group.bench_with_input(
            BenchmarkId::new("price", maturity as u32),
            &cds,
            |b, cds| {
                b.iter(|| price_cds(black_box(cds), &discount, &hazard).unwrap());
            },
        );
        group.bench_with_input(
            BenchmarkId::new("fair_spread", maturity as u32),
            &cds,
            |b, cds| {
                b.iter(|| fair_cds_spread(black_box(cds), &discount, &hazard).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_norm_cdf,
    bench_closed_form_models,
    bench_swap_pricing,
    bench_cds_pricing
);
criterion_main!(benches);
