//! Implied volatility command.

use std::io::Write;

use pricer_models::instruments::OptionContract;
use pricer_models::vol::ImpliedVolSolver;
use tracing::{debug, warn};

use super::Context;
use crate::journal::TAG_IMPLIED_VOL;
use crate::Result;

/// Journal value recorded when no volatility is found.
pub const NOT_FOUND: f64 = -1.0;

/// Run the iv command
pub fn solve(
    ctx: &mut Context,
    contract: &OptionContract,
    market_price: f64,
    tolerance: f64,
    max_iterations: usize,
    out: &mut dyn Write,
) -> Result<()> {
    let solver = ImpliedVolSolver::new(tolerance, max_iterations);
    let report = solver.solve_detailed(contract, market_price);
    debug!(
        method = ?report.method,
        iterations = report.iterations,
        converged = report.converged,
        "implied volatility solve finished"
    );

    let value = match report.volatility {
        Some(sigma) => {
            writeln!(out, "Implied volatility = {sigma:.6}")?;
            sigma
        }
        None => {
            if let Some(failure) = &report.failure {
                warn!(%failure, "Newton-Raphson gave up");
            }
            writeln!(out, "Implied volatility not found")?;
            NOT_FOUND
        }
    };

    ctx.journal.record(
        TAG_IMPLIED_VOL,
        contract,
        value,
        &format!("market={market_price}"),
    )?;
    Ok(())
}
