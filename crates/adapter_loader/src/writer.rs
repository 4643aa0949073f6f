//! Result and template writers.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use csv::WriterBuilder;
use pricer_models::instruments::OptionContract;

use crate::error::LoaderError;

/// Contract columns shared by every result file.
pub const CONTRACT_COLUMNS: [&str; 7] = ["type", "S", "K", "r", "sigma", "T", "q"];

/// Example rows written by [`write_template`], one per payoff variant.
pub const TEMPLATE_ROWS: [&str; 4] = [
    "EUROPEAN_CALL,100,100,0.05,0.2,1.0,0.0",
    "EUROPEAN_PUT,100,95,0.05,0.25,0.5,0.0",
    "BINARY_CALL,100,110,0.03,0.3,0.5,0.0",
    "DIGITAL_PUT,80,85,0.04,0.25,0.75,0.0",
];

/// Formats one result row with six decimal places.
pub fn format_row(contract: &OptionContract, value: f64) -> [String; 8] {
    [
        contract.option_type().name().to_string(),
        format!("{:.6}", contract.spot()),
        format!("{:.6}", contract.strike()),
        format!("{:.6}", contract.rate()),
        format!("{:.6}", contract.volatility()),
        format!("{:.6}", contract.expiry()),
        format!("{:.6}", contract.dividend_yield()),
        format!("{:.6}", value),
    ]
}

/// Writes `type,S,K,r,sigma,T,q,<value_column>` rows to any sink.
pub fn write_results_to<W: Write>(
    sink: W,
    value_column: &str,
    rows: &[(OptionContract, f64)],
) -> Result<(), LoaderError> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(sink);

    let mut header: Vec<&str> = CONTRACT_COLUMNS.to_vec();
    header.push(value_column);
    writer.write_record(&header)?;

    for (contract, value) in rows {
        writer.write_record(format_row(contract, *value))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a result file, replacing any existing content.
///
/// # Examples
///
/// ```rust
/// use adapter_loader::write_results;
/// use pricer_models::instruments::{OptionContract, OptionType};
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("results.csv");
/// let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
///
/// write_results(&path, "price", &[(call, 10.450584)]).unwrap();
///
/// let text = std::fs::read_to_string(&path).unwrap();
/// assert_eq!(
///     text,
///     "type,S,K,r,sigma,T,q,price\n\
///      EUROPEAN_CALL,100.000000,100.000000,0.050000,0.200000,1.000000,0.000000,10.450584\n"
/// );
/// ```
pub fn write_results(
    path: impl AsRef<Path>,
    value_column: &str,
    rows: &[(OptionContract, f64)],
) -> Result<(), LoaderError> {
    let file = File::create(path)?;
    write_results_to(file, value_column, rows)
}

/// Writes the example contract file: a commented header plus one row per
/// payoff variant.
pub fn write_template(path: impl AsRef<Path>) -> Result<(), LoaderError> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "# {}", CONTRACT_COLUMNS.join(","))?;
    for row in TEMPLATE_ROWS {
        writeln!(out, "{row}")?;
    }
    out.flush()?;
    Ok(())
}
