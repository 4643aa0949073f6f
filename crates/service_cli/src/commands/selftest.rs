//! Fixed-contract round trip through every pricer.

use std::io::Write;

use pricer_core::types::PricingError;
use pricer_models::analytical::price;
use pricer_models::instruments::{OptionContract, OptionType};
use pricer_models::vol::implied_volatility;
use pricer_pricing::mc::{MonteCarloConfig, MonteCarloPricer};

use super::Context;
use crate::Result;

const MC_SAMPLES: usize = 5_000;
const MC_SEED: u64 = 42;
const IV_TOLERANCE: f64 = 1e-6;
const IV_MAX_ITERATIONS: usize = 200;

/// Run the selftest command
pub fn run(ctx: &mut Context, out: &mut dyn Write) -> Result<()> {
    let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
    let put = OptionContract::new(OptionType::EuropeanPut, 100.0, 110.0, 0.03, 0.25, 0.5, 0.0);

    let call_price = price(&call);
    writeln!(out, "OC1: {call} => Price(analytic): {call_price:.6}")?;
    writeln!(out, "OC2: {put} => Price(analytic): {:.6}", price(&put))?;

    let config = MonteCarloConfig::builder()
        .n_samples(MC_SAMPLES)
        .seed(MC_SEED)
        .antithetic(true)
        .build()
        .map_err(PricingError::from)?;
    let mc_price = MonteCarloPricer::new(config).price(&call);
    writeln!(out, "OC1 MC(Antithetic,5k) => {mc_price:.6}")?;

    let iv = implied_volatility(&call, call_price, IV_TOLERANCE, IV_MAX_ITERATIONS);
    match iv {
        Some(sigma) => writeln!(out, "Implied vol of OC1 (expect 0.2) => {sigma:.6}")?,
        None => writeln!(out, "Implied vol of OC1 (expect 0.2) => not found")?,
    }

    ctx.journal.note("SELFTEST", "Self-test executed")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{capture, context_in};
    use tempfile::tempdir;

    #[test]
    fn test_selftest_output() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let text = capture(|out| run(&mut ctx, out));
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        let last_number = |line: &str| -> f64 { line.rsplit(' ').next().unwrap().parse().unwrap() };
        assert!((last_number(lines[0]) - 10.4506).abs() < 1e-4);
        assert!((last_number(lines[2]) - 10.4506).abs() < 0.5);
        assert!((last_number(lines[3]) - 0.2).abs() < 1e-4);
    }
}
