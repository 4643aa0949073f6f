//! Contract file validation and repair.
//!
//! A data line is good when it has at least seven fields, a known type name
//! and six parseable numbers. Repair keeps the good lines and drops the rest.

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::error::LoaderError;
use crate::reader::{data_lines, parse_record, split_fields};

/// Outcome of validating a contract file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Good lines, fields trimmed and re-joined with commas.
    pub good: Vec<String>,
    /// Bad lines with their 1-based line number.
    pub bad: Vec<(u64, String)>,
}

impl ValidationReport {
    /// Whether every data line was good.
    pub fn is_clean(&self) -> bool {
        self.bad.is_empty()
    }
}

/// Validates contract rows from any CSV source.
pub fn validate_reader<R: Read>(mut source: R) -> Result<ValidationReport, LoaderError> {
    let mut text = String::new();
    source.read_to_string(&mut text)?;

    let mut report = ValidationReport::default();
    for (line, content) in data_lines(&text) {
        let record = split_fields(content)?;
        let joined = record.iter().collect::<Vec<_>>().join(",");
        match parse_record(&record) {
            Ok(_) => report.good.push(joined),
            Err(_) => report.bad.push((line, joined)),
        }
    }

    Ok(report)
}

/// Validates a contract file.
///
/// # Errors
///
/// Only I/O and CSV framing failures are errors; bad rows land in
/// [`ValidationReport::bad`].
pub fn validate_file(path: impl AsRef<Path>) -> Result<ValidationReport, LoaderError> {
    validate_reader(File::open(path)?)
}

/// Writes only the good lines of a report, one per line.
pub fn write_repaired(report: &ValidationReport, path: impl AsRef<Path>) -> Result<(), LoaderError> {
    let mut out = BufWriter::new(File::create(path)?);
    for line in &report.good {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIXED: &str = "\
# type,S,K,r,sigma,T,q
EUROPEAN_CALL,100,100,0.05,0.2,1.0,0.0
EUROPEAN_CALL,100,100
AMERICAN_PUT,100,100,0.05,0.2,1.0,0.0
EUROPEAN_PUT, 100 ,95,0.05,0.25,0.5,0.0
DIGITAL_PUT,80,x,0.04,0.25,0.75,0.0
";

    #[test]
    fn test_sorts_good_and_bad_lines() {
        let report = validate_reader(MIXED.as_bytes()).unwrap();
        assert_eq!(
            report.good,
            vec![
                "EUROPEAN_CALL,100,100,0.05,0.2,1.0,0.0".to_string(),
                "EUROPEAN_PUT,100,95,0.05,0.25,0.5,0.0".to_string(),
            ]
        );
        let bad_lines: Vec<u64> = report.bad.iter().map(|(line, _)| *line).collect();
        assert_eq!(bad_lines, vec![3, 4, 6]);
        assert!(!report.is_clean());
    }

    #[test]
    fn test_clean_file() {
        let report = validate_reader("BINARY_CALL,100,110,0.03,0.3,0.5,0.0\n".as_bytes()).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.good.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let report = validate_reader("".as_bytes()).unwrap();
        assert_eq!(report, ValidationReport::default());
    }
}
