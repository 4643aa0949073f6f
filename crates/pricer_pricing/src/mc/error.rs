//! Error types for the Monte Carlo engine.
//!
//! This module defines the configuration errors raised before any sampling
//! starts. Numerical degeneracies during sampling are not errors; they flow
//! through the result as NaN.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Configuration error for Monte Carlo pricing.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum McError {
    /// Sample count of zero.
    #[error("Invalid sample count {0}: must be > 0")]
    InvalidSampleCount(usize),
}

impl From<McError> for PricingError {
    fn from(err: McError) -> Self {
        PricingError::InvalidArgument(err.to_string())
    }
}
