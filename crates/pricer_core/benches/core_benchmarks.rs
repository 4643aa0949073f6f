//! Criterion benchmarks for pricer_core numerical kernels.
//!
//! Measures the normal CDF approximation and both root finders on a
//! representative smooth target.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};

/// Benchmark single and batched normal CDF/PDF evaluation.
fn bench_distributions(c: &mut Criterion) {
    let mut group = c.benchmark_group("distributions");

    group.bench_function("norm_cdf", |b| b.iter(|| norm_cdf(black_box(0.35_f64))));
    group.bench_function("norm_pdf", |b| b.iter(|| norm_pdf(black_box(0.35_f64))));

    for size in [100, 10_000] {
        let xs: Vec<f64> = (0..size)
            .map(|i| -5.0 + 10.0 * i as f64 / (size - 1) as f64)
            .collect();
        group.bench_with_input(BenchmarkId::new("norm_cdf_batch", size), &xs, |b, xs| {
            b.iter(|| xs.iter().map(|&x| norm_cdf(black_box(x))).sum::<f64>());
        });
    }

    group.finish();
}

/// Benchmark bisection against Newton-Raphson on x³ - x - 2.
fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("solvers");

    let f = |x: f64| x * x * x - x - 2.0;
    let f_prime = |x: f64| 3.0 * x * x - 1.0;

    let bisection = BisectionSolver::new(SolverConfig::new(1e-10, 200));
    group.bench_function("bisection", |b| {
        b.iter(|| bisection.find_root(f, black_box(1.0), black_box(2.0)))
    });

    let newton = NewtonRaphsonSolver::new(SolverConfig::new(1e-10, 200));
    group.bench_function("newton_raphson", |b| {
        b.iter(|| newton.find_root(f, f_prime, black_box(1.5)))
    });

    group.finish();
}

criterion_group!(benches, bench_distributions, bench_solvers);
criterion_main!(benches);
