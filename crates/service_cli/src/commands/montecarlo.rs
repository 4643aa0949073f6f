//! Monte Carlo commands: single-threaded, parallel and histogram.

use std::io::Write;
use std::time::Instant;

use pricer_core::types::PricingError;
use pricer_models::instruments::OptionContract;
use pricer_pricing::mc::{self, MonteCarloConfig, MonteCarloPricer};
use tracing::info;

use super::Context;
use crate::histogram::render_histogram;
use crate::journal::{TAG_MC, TAG_MC_PARALLEL};
use crate::Result;

/// Run the mc command
pub fn simulate(
    ctx: &mut Context,
    contract: &OptionContract,
    samples: usize,
    seed: u64,
    antithetic: bool,
    out: &mut dyn Write,
) -> Result<()> {
    let config = MonteCarloConfig::builder()
        .n_samples(samples)
        .seed(seed)
        .antithetic(antithetic)
        .build()
        .map_err(PricingError::from)?;
    info!(
        samples,
        seed,
        antithetic,
        reproducible = config.is_reproducible(),
        "running Monte Carlo"
    );
    let start = Instant::now();
    let value = MonteCarloPricer::new(config).price(contract);
    let elapsed = start.elapsed().as_millis();

    writeln!(out, "MC price = {value:.6}   Time(ms): {elapsed}")?;
    ctx.journal.record(
        TAG_MC,
        contract,
        value,
        &format!("nsim={samples},antithetic={antithetic},seed={seed}"),
    )?;
    Ok(())
}

/// Run the mc-parallel command
pub fn simulate_parallel(
    ctx: &mut Context,
    contract: &OptionContract,
    samples: usize,
    workers: usize,
    seed: u64,
    out: &mut dyn Write,
) -> Result<()> {
    info!("Spawning {} worker(s)", workers);
    let start = Instant::now();
    let value = mc::simulate_parallel(contract, samples, workers, seed)?;
    let elapsed = start.elapsed().as_millis();

    writeln!(out, "Parallel MC price = {value:.6}   Time(ms): {elapsed}")?;
    ctx.journal.record(
        TAG_MC_PARALLEL,
        contract,
        value,
        &format!("nsim={samples},workers={workers},seed={seed}"),
    )?;
    Ok(())
}

/// Run the histogram command
pub fn histogram(
    ctx: &mut Context,
    contract: &OptionContract,
    samples: usize,
    seed: u64,
    bins: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let terminal = mc::terminal_samples(contract, samples, seed);
    writeln!(out, "{}", render_histogram(&terminal, bins))?;
    ctx.journal
        .note("HISTOGRAM", &format!("Ascii histogram for {contract} nsim={samples}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{capture, context_in};
    use crate::CliError;
    use pricer_models::instruments::OptionType;
    use tempfile::tempdir;

    fn atm_put() -> OptionContract {
        OptionContract::new(OptionType::EuropeanPut, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0)
    }

    #[test]
    fn test_mc_prints_and_journals() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let text = capture(|out| simulate(&mut ctx, &atm_put(), 10_000, 42, true, out));

        assert!(text.starts_with("MC price = "));
        let entry = &ctx.journal.tail(1).unwrap()[0];
        assert!(entry.ends_with("nsim=10000,antithetic=true,seed=42"));
    }

    #[test]
    fn test_mc_matches_engine_for_fixed_seed() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let text = capture(|out| simulate(&mut ctx, &atm_put(), 4_000, 11, false, out));

        let printed: f64 = text
            .trim_start_matches("MC price = ")
            .split_whitespace()
            .next()
            .unwrap()
            .parse()
            .unwrap();
        let expected = mc::simulate(&atm_put(), 4_000, 11, false).unwrap();
        assert!((printed - expected).abs() < 1e-6);
    }

    #[test]
    fn test_mc_zero_samples_is_error() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let mut sink = Vec::new();
        let err = simulate(&mut ctx, &atm_put(), 0, 42, false, &mut sink).unwrap_err();
        assert!(matches!(err, CliError::Pricing(_)));
        assert!(ctx.journal.tail(1).unwrap().is_empty());
    }

    #[test]
    fn test_parallel_journals_worker_count() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let text = capture(|out| simulate_parallel(&mut ctx, &atm_put(), 8_000, 4, 7, out));

        assert!(text.starts_with("Parallel MC price = "));
        let entry = &ctx.journal.tail(1).unwrap()[0];
        assert!(entry.contains(",MC_PARALLEL,"));
        assert!(entry.ends_with("nsim=8000,workers=4,seed=7"));
    }

    #[test]
    fn test_histogram_has_one_line_per_bin() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let text = capture(|out| histogram(&mut ctx, &atm_put(), 5_000, 3, 12, out));
        assert_eq!(text.lines().count(), 12);
    }
}
