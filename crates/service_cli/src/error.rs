//! Error types for the BSM CLI.

use adapter_loader::LoaderError;
use pricer_core::types::PricingError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Pricing engine rejected its input
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Contract file could not be read or written
    #[error("Contract file error: {0}")]
    Loader(#[from] LoaderError),

    /// Journal or export file failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON output failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
