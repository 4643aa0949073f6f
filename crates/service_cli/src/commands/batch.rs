//! Batch CSV commands: analytic, per-row Monte Carlo, template and repair.

use std::io::Write;
use std::path::Path;

use adapter_loader::{
    read_contracts, validate_file, write_repaired, write_results, write_template,
};
use pricer_models::analytical::price;
use pricer_pricing::mc;
use tracing::{info, warn};

use super::Context;
use crate::{CliError, Result};

/// Bad lines echoed by the validate command.
const BAD_LINE_PREVIEW: usize = 10;

fn require_file(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(CliError::FileNotFound(path.display().to_string()))
    }
}

/// Seed for 1-based row `row` given the base seed; 0 stays unpredictable.
pub fn row_seed(base: u64, row: usize) -> u64 {
    if base == 0 {
        0
    } else {
        base.wrapping_add(row as u64)
    }
}

/// Run the batch command
pub fn analytic(ctx: &mut Context, input: &Path, output: &Path, out: &mut dyn Write) -> Result<()> {
    require_file(input)?;
    let contracts = read_contracts(input)?;
    if contracts.is_empty() {
        warn!(input = %input.display(), "no contracts read");
        writeln!(out, "No options read from {}", input.display())?;
        return Ok(());
    }

    let mut rows = Vec::with_capacity(contracts.len());
    for contract in contracts {
        let value = price(&contract);
        writeln!(out, "{contract} -> {value:.6}")?;
        rows.push((contract, value));
    }

    write_results(output, "price", &rows)?;
    writeln!(out, "Saved results to {}", output.display())?;
    ctx.journal.note(
        "BATCH",
        &format!("Batch processed {} options -> {}", rows.len(), output.display()),
    )?;
    Ok(())
}

/// Run the batch-mc command
pub fn monte_carlo(
    ctx: &mut Context,
    input: &Path,
    output: &Path,
    samples: usize,
    seed: u64,
    out: &mut dyn Write,
) -> Result<()> {
    require_file(input)?;
    let contracts = read_contracts(input)?;
    if contracts.is_empty() {
        warn!(input = %input.display(), "no contracts read");
        writeln!(out, "No options read from {}", input.display())?;
        return Ok(());
    }
    info!(rows = contracts.len(), samples, seed, "batch Monte Carlo");

    let mut rows = Vec::with_capacity(contracts.len());
    for (i, contract) in contracts.into_iter().enumerate() {
        let row = i + 1;
        let value = mc::simulate(&contract, samples, row_seed(seed, row), false)?;
        writeln!(out, "Row {row} -> {value:.6}")?;
        rows.push((contract, value));
    }

    write_results(output, "mc_price", &rows)?;
    writeln!(out, "Saved results to {}", output.display())?;
    ctx.journal.note(
        "BATCH_MC",
        &format!("Batch MC on {} -> {}", input.display(), output.display()),
    )?;
    Ok(())
}

/// Run the template command
pub fn template(ctx: &mut Context, output: &Path, out: &mut dyn Write) -> Result<()> {
    write_template(output)?;
    writeln!(out, "Saved example to {}", output.display())?;
    ctx.journal
        .note("TEMPLATE", &format!("Example CSV written -> {}", output.display()))?;
    Ok(())
}

/// Run the validate command
pub fn validate(ctx: &mut Context, input: &Path, output: &Path, out: &mut dyn Write) -> Result<()> {
    require_file(input)?;
    let report = validate_file(input)?;
    writeln!(
        out,
        "Good lines: {}   Bad lines: {}",
        report.good.len(),
        report.bad.len()
    )?;

    if report.is_clean() {
        writeln!(out, "File looks OK")?;
        return Ok(());
    }

    writeln!(out, "First bad lines:")?;
    for (line, text) in report.bad.iter().take(BAD_LINE_PREVIEW) {
        writeln!(out, "{line}:{text}")?;
    }
    write_repaired(&report, output)?;
    writeln!(out, "Repaired file written to {}", output.display())?;
    ctx.journal.note(
        "VALIDATE",
        &format!(
            "CSV validated: {} -> repaired: {}",
            input.display(),
            output.display()
        ),
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{capture, context_in};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_row_seed() {
        assert_eq!(row_seed(0, 1), 0);
        assert_eq!(row_seed(100, 1), 101);
        assert_eq!(row_seed(100, 3), 103);
        assert_eq!(row_seed(u64::MAX, 2), 1);
    }

    #[test]
    fn test_batch_writes_results() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let input = dir.path().join("options.csv");
        let output = dir.path().join("results.csv");
        write_template(&input).unwrap();

        let text = capture(|out| analytic(&mut ctx, &input, &output, out));
        assert_eq!(text.lines().filter(|l| l.contains(" -> ")).count(), 4);

        let results = fs::read_to_string(&output).unwrap();
        assert!(results.starts_with("type,S,K,r,sigma,T,q,price\n"));
        assert_eq!(results.lines().count(), 5);
    }

    #[test]
    fn test_batch_mc_is_reproducible_with_seed() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let input = dir.path().join("options.csv");
        let first = dir.path().join("mc1.csv");
        let second = dir.path().join("mc2.csv");
        write_template(&input).unwrap();

        capture(|out| monte_carlo(&mut ctx, &input, &first, 2_000, 11, out));
        capture(|out| monte_carlo(&mut ctx, &input, &second, 2_000, 11, out));

        let a = fs::read_to_string(&first).unwrap();
        assert!(a.starts_with("type,S,K,r,sigma,T,q,mc_price\n"));
        assert_eq!(a, fs::read_to_string(&second).unwrap());
    }

    #[test]
    fn test_missing_input() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let mut sink = Vec::new();
        let err = analytic(
            &mut ctx,
            &dir.path().join("absent.csv"),
            &dir.path().join("out.csv"),
            &mut sink,
        )
        .unwrap_err();
        assert!(matches!(err, CliError::FileNotFound(_)));
    }

    #[test]
    fn test_validate_writes_repaired_only_when_needed() {
        let dir = tempdir().unwrap();
        let mut ctx = context_in(dir.path());
        let input = dir.path().join("options.csv");
        let repaired = dir.path().join("repaired.csv");

        write_template(&input).unwrap();
        let text = capture(|out| validate(&mut ctx, &input, &repaired, out));
        assert!(text.contains("File looks OK"));
        assert!(!repaired.exists());

        fs::write(&input, "EUROPEAN_CALL,100,100,0.05,0.2,1.0,0.0\nFOO,1,2\n").unwrap();
        let text = capture(|out| validate(&mut ctx, &input, &repaired, out));
        assert!(text.contains("Good lines: 1   Bad lines: 1"));
        assert!(text.contains("2:FOO,1,2"));
        assert_eq!(
            fs::read_to_string(&repaired).unwrap(),
            "EUROPEAN_CALL,100,100,0.05,0.2,1.0,0.0\n"
        );
    }
}
