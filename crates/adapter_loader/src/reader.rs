//! Contract CSV reader.
//!
//! Rows follow `type,S,K,r,sigma,T,q`. Lines starting with `#` and blank
//! lines are ignored, fields are trimmed, and rows with fewer than seven
//! fields are skipped with a warning. Any further columns are ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use pricer_models::instruments::{OptionContract, OptionType};
use tracing::warn;

use crate::error::LoaderError;

/// Number of fields in a contract row.
pub const FIELD_COUNT: usize = 7;

const NUMERIC_FIELDS: [&str; 6] = ["S", "K", "r", "sigma", "T", "q"];

/// Non-blank, non-comment lines with their 1-based line numbers, trimmed.
pub(crate) fn data_lines(text: &str) -> impl Iterator<Item = (u64, &str)> {
    text.lines()
        .enumerate()
        .map(|(i, line)| (i as u64 + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

/// Splits one line into trimmed fields.
pub(crate) fn split_fields(line: &str) -> Result<StringRecord, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    reader.read_record(&mut record)?;
    Ok(record)
}

/// Parses the first seven fields of a record into a contract.
///
/// # Errors
///
/// Returns a description of the first field that fails to parse.
pub fn parse_record(record: &StringRecord) -> Result<OptionContract, String> {
    if record.len() < FIELD_COUNT {
        return Err(format!(
            "expected {FIELD_COUNT} fields, found {}",
            record.len()
        ));
    }

    let option_type: OptionType = record[0].parse().map_err(|e| format!("{e}"))?;

    let mut values = [0.0_f64; 6];
    for (i, name) in NUMERIC_FIELDS.iter().enumerate() {
        let raw = &record[i + 1];
        values[i] = raw
            .parse()
            .map_err(|_| format!("invalid {name} value '{raw}'"))?;
    }
    let [spot, strike, rate, sigma, expiry, dividend] = values;

    Ok(OptionContract::new(
        option_type,
        spot,
        strike,
        rate,
        sigma,
        expiry,
        dividend,
    ))
}

/// Reads contracts from any CSV source.
///
/// # Errors
///
/// - `LoaderError::Io` if the source cannot be read as UTF-8 text
/// - `LoaderError::Csv` on malformed quoting
/// - `LoaderError::Parse` when a full-length row has an unknown type name or
///   a non-numeric field
pub fn read_contracts_from<R: Read>(mut source: R) -> Result<Vec<OptionContract>, LoaderError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;

    let mut contracts = Vec::new();
    for (line, content) in data_lines(&text) {
        let record = split_fields(content)?;
        if record.len() < FIELD_COUNT {
            warn!(line, fields = record.len(), "skipping short CSV row");
            continue;
        }
        let contract = parse_record(&record).map_err(|message| LoaderError::parse(line, message))?;
        contracts.push(contract);
    }

    Ok(contracts)
}

/// Reads contracts from a CSV file.
///
/// # Examples
///
/// ```rust
/// use std::io::Write;
/// use adapter_loader::read_contracts;
///
/// let mut file = tempfile::NamedTempFile::new().unwrap();
/// writeln!(file, "# type,S,K,r,sigma,T,q").unwrap();
/// writeln!(file, "EUROPEAN_CALL,100,100,0.05,0.2,1.0,0.0").unwrap();
///
/// let contracts = read_contracts(file.path()).unwrap();
/// assert_eq!(contracts.len(), 1);
/// ```
pub fn read_contracts(path: impl AsRef<Path>) -> Result<Vec<OptionContract>, LoaderError> {
    let file = File::open(path)?;
    read_contracts_from(file)
}
