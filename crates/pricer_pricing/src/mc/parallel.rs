//! Parallel Monte Carlo coordinator.
//!
//! Splits a sample budget across independent workers, each with its own
//! generator and its own [`PayoffSum`]. Partial sums are collected in worker
//! order and folded sequentially, so a fixed seed and worker count give the
//! same price on every run regardless of thread scheduling.
//!
//! # Examples
//!
//! ```rust
//! use pricer_models::instruments::{OptionContract, OptionType};
//! use pricer_pricing::mc::{partition, simulate_parallel};
//!
//! assert_eq!(partition(10_001, 4), vec![2_500, 2_500, 2_500, 2_501]);
//!
//! let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
//! let price = simulate_parallel(&call, 80_000, 4, 42).unwrap();
//! assert!((price - 10.4506).abs() < 0.3);
//! ```

use pricer_core::types::PricingError;
use pricer_models::instruments::OptionContract;
use rayon::prelude::*;
use tracing::debug;

use super::error::McError;
use super::pricer::{accumulate, simulate, PayoffSum};
use crate::rng::PricerRng;

/// Splits `total` samples into `workers` chunks.
///
/// Every chunk gets `total / workers`; the last chunk also absorbs the
/// remainder. Chunks may be zero when `workers > total`. Returns an empty
/// vector when `workers == 0`.
pub fn partition(total: usize, workers: usize) -> Vec<usize> {
    if workers == 0 {
        return Vec::new();
    }
    let base = total / workers;
    let mut chunks = vec![base; workers];
    chunks[workers - 1] += total % workers;
    chunks
}

/// Generator for worker `index` given the base seed.
///
/// Base seed 0 gives each worker independent entropy. Otherwise the worker
/// seed is `seed + index` with wrap-around, used literally even if it wraps
/// to zero.
fn worker_rng(seed: u64, index: usize) -> PricerRng {
    if seed == 0 {
        PricerRng::from_entropy()
    } else {
        PricerRng::from_seed(seed.wrapping_add(index as u64))
    }
}

/// Plain Monte Carlo price computed by `worker_count` parallel workers.
///
/// With `worker_count <= 1` this is exactly
/// [`simulate(contract, total_samples, seed, false)`](simulate).
///
/// # Errors
///
/// `PricingError::InvalidArgument` if `total_samples == 0`.
pub fn simulate_parallel(
    contract: &OptionContract,
    total_samples: usize,
    worker_count: usize,
    seed: u64,
) -> Result<f64, PricingError> {
    if total_samples == 0 {
        return Err(McError::InvalidSampleCount(total_samples).into());
    }
    if worker_count <= 1 {
        return simulate(contract, total_samples, seed, false);
    }

    let chunks = partition(total_samples, worker_count);
    debug!(
        total = total_samples,
        workers = worker_count,
        chunk = chunks[0],
        last = chunks[worker_count - 1],
        "partitioned sample budget"
    );

    let partials: Vec<PayoffSum> = chunks
        .into_par_iter()
        .enumerate()
        .map(|(index, n)| {
            let mut rng = worker_rng(seed, index);
            let partial = accumulate(contract, n, &mut rng, false);
            debug!(worker = index, samples = n, seed = ?rng.seed(), "worker finished");
            partial
        })
        .collect();

    let total = partials
        .into_iter()
        .fold(PayoffSum::default(), PayoffSum::merge);
    Ok(total.discounted_mean(contract.discount_factor()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pricer_models::instruments::OptionType;

    fn atm_call() -> OptionContract {
        OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0)
    }

    // ==========================================================
    // partition tests
    // ==========================================================

    #[test]
    fn test_partition_even() {
        assert_eq!(partition(10_000, 4), vec![2_500; 4]);
    }

    #[test]
    fn test_partition_remainder_goes_last() {
        assert_eq!(partition(10_001, 4), vec![2_500, 2_500, 2_500, 2_501]);
    }

    #[test]
    fn test_partition_more_workers_than_samples() {
        let chunks = partition(3, 5);
        assert_eq!(chunks, vec![0, 0, 0, 0, 3]);
    }

    #[test]
    fn test_partition_zero_workers() {
        assert!(partition(100, 0).is_empty());
    }

    // ==========================================================
    // simulate_parallel tests
    // ==========================================================

    #[test]
    fn test_zero_total_is_invalid_argument() {
        let err = simulate_parallel(&atm_call(), 0, 4, 1).unwrap_err();
        assert!(matches!(err, PricingError::InvalidArgument(_)));
    }

    #[test]
    fn test_single_worker_delegates_to_simulate() {
        let c = atm_call();
        for workers in [0, 1] {
            let parallel = simulate_parallel(&c, 5_000, workers, 77).unwrap();
            let serial = simulate(&c, 5_000, 77, false).unwrap();
            assert_eq!(parallel.to_bits(), serial.to_bits());
        }
    }

    #[test]
    fn test_matches_sequential_replay_of_workers() {
        let c = atm_call();
        let expected = partition(10_001, 3)
            .into_iter()
            .enumerate()
            .map(|(i, n)| accumulate(&c, n, &mut PricerRng::from_seed(50 + i as u64), false))
            .fold(PayoffSum::default(), PayoffSum::merge)
            .discounted_mean(c.discount_factor());

        let actual = simulate_parallel(&c, 10_001, 3, 50).unwrap();
        assert_eq!(actual.to_bits(), expected.to_bits());
    }

    #[test]
    fn test_reproducible_across_runs() {
        let c = atm_call();
        let a = simulate_parallel(&c, 20_000, 4, 9).unwrap();
        let b = simulate_parallel(&c, 20_000, 4, 9).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_seed_wraps_without_switching_to_entropy() {
        let c = atm_call();
        let a = simulate_parallel(&c, 4_000, 4, u64::MAX).unwrap();
        let b = simulate_parallel(&c, 4_000, 4, u64::MAX).unwrap();
        assert_eq!(a.to_bits(), b.to_bits());
    }

    #[test]
    fn test_entropy_seed_still_prices() {
        let price = simulate_parallel(&atm_call(), 100_000, 4, 0).unwrap();
        assert!((price - 10.4506).abs() < 0.5, "price = {price}");
    }
}
