//! Error types for contract file handling.

use thiserror::Error;

/// Error raised while reading or writing contract files.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// Underlying file I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV framing.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A row had enough fields but one of them did not parse.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number in the source file.
        line: u64,
        /// What failed to parse.
        message: String,
    },
}

impl LoaderError {
    /// Create a parse error for a given line.
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}
