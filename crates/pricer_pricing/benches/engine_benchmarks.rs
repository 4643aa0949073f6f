//! Criterion benchmarks for the Monte Carlo engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pricer_models::instruments::{OptionContract, OptionType};
use pricer_pricing::mc::{simulate, simulate_parallel, terminal_samples};
use pricer_pricing::rng::PricerRng;

fn atm_call() -> OptionContract {
    OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0)
}

fn bench_rng(c: &mut Criterion) {
    let mut group = c.benchmark_group("rng");
    group.throughput(Throughput::Elements(1));
    group.bench_function("gen_normal", |b| {
        let mut rng = PricerRng::from_seed(42);
        b.iter(|| black_box(rng.gen_normal()))
    });
    group.finish();
}

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let call = atm_call();

    for n in [10_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("plain", n), &n, |b, &n| {
            b.iter(|| simulate(black_box(&call), n, 42, false))
        });
        group.bench_with_input(BenchmarkId::new("antithetic", n), &n, |b, &n| {
            b.iter(|| simulate(black_box(&call), n, 42, true))
        });
    }

    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate_parallel");
    let call = atm_call();
    let total = 400_000usize;
    group.throughput(Throughput::Elements(total as u64));

    for workers in [1usize, 2, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(workers), &workers, |b, &workers| {
            b.iter(|| simulate_parallel(black_box(&call), total, workers, 42))
        });
    }

    group.finish();
}

fn bench_terminal_samples(c: &mut Criterion) {
    let call = atm_call();
    c.bench_function("terminal_samples_50k", |b| {
        b.iter(|| terminal_samples(black_box(&call), 50_000, 7))
    });
}

criterion_group!(
    benches,
    bench_rng,
    bench_simulate,
    bench_parallel,
    bench_terminal_samples
);
criterion_main!(benches);
