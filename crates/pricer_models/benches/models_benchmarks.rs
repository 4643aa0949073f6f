//! Criterion benchmarks for closed-form pricing and implied volatility.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{greeks, price};
use pricer_models::instruments::{OptionContract, OptionType};
use pricer_models::vol::ImpliedVolSolver;

fn bench_analytic(c: &mut Criterion) {
    let mut group = c.benchmark_group("analytic");

    for option_type in OptionType::ALL {
        let contract = OptionContract::new(option_type, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
        group.bench_with_input(
            BenchmarkId::new("price", option_type),
            &contract,
            |b, contract| b.iter(|| price(black_box(contract))),
        );
    }

    let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
    group.bench_function("greeks", |b| b.iter(|| greeks(black_box(&call))));

    group.finish();
}

fn bench_implied_vol(c: &mut Criterion) {
    let mut group = c.benchmark_group("implied_vol");
    let solver = ImpliedVolSolver::new(1e-8, 200);

    for strike in [80.0, 100.0, 120.0] {
        let contract = OptionContract::new(OptionType::EuropeanCall, 100.0, strike, 0.05, 0.25, 1.0, 0.0);
        let market = price(&contract);
        group.bench_with_input(BenchmarkId::new("bisection", strike), &contract, |b, contract| {
            b.iter(|| solver.solve(black_box(contract), black_box(market)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_analytic, bench_implied_vol);
criterion_main!(benches);
