// ============================================================================
// Valuation Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Fixed-point arithmetic - checked_mul / checked_div / round_dp
// 2. Calculator - worth reads and set_worth / set_price writes
// ============================================================================

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use stock_valuation::numeric::{Price, RoundingMode, Shares, Worth};
use stock_valuation::prelude::*;

fn benchmark_fixed_decimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_decimal");

    let price: Price = "10.126".parse().unwrap();
    let shares: Shares = "1234.5".parse().unwrap();

    group.bench_function("checked_mul", |b| {
        b.iter(|| black_box(price).checked_mul(black_box(shares)))
    });

    group.bench_function("checked_div", |b| {
        b.iter(|| black_box(shares).checked_div(black_box(price)))
    });

    for decimals in [0u8, 2, 4] {
        group.bench_with_input(
            BenchmarkId::new("round_dp", decimals),
            &decimals,
            |b, &decimals| {
                b.iter(|| black_box(price).round_dp(decimals, RoundingMode::MidpointNearestEven))
            },
        );
    }

    group.finish();
}

fn benchmark_calculator(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator");

    let mut calc = ValuationCalculator::new(
        Price::from_integer(10).unwrap(),
        Shares::from_integer(5).unwrap(),
    )
    .unwrap();

    group.bench_function("worth", |b| b.iter(|| black_box(&calc).worth()));

    let target = Worth::from_integer(1_000);
    group.bench_function("set_worth", |b| {
        b.iter(|| calc.set_worth(black_box(target)))
    });

    let mut rounded = ValuationCalculator::from_config(&ValuationConfig::cents()).unwrap();
    let raw_price: Price = "10.126".parse().unwrap();
    group.bench_function("set_price_rounded", |b| {
        b.iter(|| rounded.set_price(black_box(raw_price)))
    });

    group.finish();
}

criterion_group!(benches, benchmark_fixed_decimal, benchmark_calculator);
criterion_main!(benches);
