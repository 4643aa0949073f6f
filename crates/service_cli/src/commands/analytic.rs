//! Analytic price and Greeks commands.

use std::io::Write;

use pricer_models::analytical::{greeks as analytic_greeks, price as analytic_price, Greeks};
use pricer_models::instruments::OptionContract;
use serde::Serialize;
use tracing::info;

use super::Context;
use crate::cli::OutputFormat;
use crate::journal::TAG_ANALYTIC;
use crate::Result;

/// Price command output in JSON form.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    /// Priced contract
    pub contract: OptionContract,
    /// Analytic price
    pub price: f64,
    /// Analytic sensitivities (null when undefined)
    pub greeks: Greeks,
}

/// One-line Greeks summary.
pub fn format_greeks(g: &Greeks) -> String {
    format!(
        "Delta={:.6}, Gamma={:.6}, Vega={:.6}, Theta={:.6}, Rho={:.6}",
        g.delta, g.gamma, g.vega, g.theta, g.rho
    )
}

/// Run the price command
pub fn price(
    ctx: &mut Context,
    contract: &OptionContract,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<()> {
    info!(%contract, "analytic pricing");
    let value = analytic_price(contract);
    let greeks = analytic_greeks(contract);

    match format {
        OutputFormat::Table => {
            writeln!(out, "Contract: {contract}")?;
            writeln!(out, "Analytic price = {value:.6}")?;
            writeln!(out, "{}", format_greeks(&greeks))?;
        }
        OutputFormat::Json => {
            let report = PriceReport {
                contract: *contract,
                price: value,
                greeks,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
        }
    }

    ctx.journal.record(TAG_ANALYTIC, contract, value, "")?;
    Ok(())
}

/// Run the greeks command
pub fn greeks(ctx: &mut Context, contract: &OptionContract, out: &mut dyn Write) -> Result<()> {
    let value = analytic_price(contract);
    let greeks = analytic_greeks(contract);

    writeln!(out, "Price: {value:.6}")?;
    if greeks.is_defined() {
        writeln!(out, "Greeks: {}", format_greeks(&greeks))?;
    } else {
        writeln!(out, "Greeks: undefined at or past maturity")?;
    }

    ctx.journal.note("GREEKS", &format!("Greeks computed for {contract}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{capture, context_in};
    use pricer_models::instruments::OptionType;
    use tempfile::tempdir;

    fn atm_call() -> OptionContract {
        OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0)
    }

    #[test]
    fn test_price_table_output() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let text = capture(|out| price(&mut ctx, &atm_call(), OutputFormat::Table, out));

        assert!(text.contains("Analytic price = 10.4505"));
        assert!(text.contains("Delta=0.6368"));

        let journal = ctx.journal.tail(1).unwrap();
        assert!(journal[0].contains(",ANALYTIC,EUROPEAN_CALL"));
    }

    #[test]
    fn test_price_json_output() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let text = capture(|out| price(&mut ctx, &atm_call(), OutputFormat::Json, out));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        let price = value["price"].as_f64().unwrap();
        assert!((price - 10.4506).abs() < 1e-3);
        assert!(value["greeks"]["vega"].as_f64().unwrap() > 37.0);
    }

    #[test]
    fn test_greeks_at_expiry_reported_undefined() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let expired = OptionContract::new(OptionType::EuropeanPut, 90.0, 100.0, 0.05, 0.2, 0.0, 0.0);
        let text = capture(|out| greeks(&mut ctx, &expired, out));

        assert!(text.contains("Price: 10.000000"));
        assert!(text.contains("undefined"));
    }
}
