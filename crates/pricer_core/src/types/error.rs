//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Errors from pricing and simulation operations
//! - `SolverError`: Errors from root-finding solvers
//!
//! Numerically undefined results (NaN Greeks, NaN `d1`) are not errors and
//! never appear here; only invalid discrete inputs do.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidArgument`: A discrete input the engine cannot accept
///   (unknown payoff variant, zero sample count)
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidArgument("sample count must be > 0".to_string());
/// assert_eq!(format!("{}", err), "Invalid argument: sample count must be > 0");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PricingError {
    /// Invalid discrete input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl PricingError {
    /// Shorthand for an [`PricingError::InvalidArgument`].
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        PricingError::InvalidArgument(msg.into())
    }
}

/// Root-finding solver errors.
///
/// # Variants
/// - `MaxIterationsExceeded`: Solver failed to converge within iteration limit
/// - `DerivativeNearZero`: Derivative below the solver's floor
/// - `NoBracket`: Function values at bracket endpoints have same sign
/// - `NumericalInstability`: Iterate became non-finite
///
/// # Examples
/// ```
/// use pricer_core::types::SolverError;
///
/// let err = SolverError::MaxIterationsExceeded { iterations: 100 };
/// assert!(format!("{}", err).contains("100 iterations"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverError {
    /// Solver failed to converge within maximum iterations.
    #[error("Failed to converge after {iterations} iterations")]
    MaxIterationsExceeded {
        /// Number of iterations attempted
        iterations: usize,
    },

    /// Derivative too small for a safe Newton step.
    #[error("Derivative near zero at x = {x}")]
    DerivativeNearZero {
        /// The x value where derivative was near zero
        x: f64,
    },

    /// No valid bracket (function values at endpoints have same sign).
    #[error("No bracket: f({a}) and f({b}) have same sign")]
    NoBracket {
        /// Left bracket endpoint
        a: f64,
        /// Right bracket endpoint
        b: f64,
    },

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = PricingError::invalid_argument("unsupported option type: FOO");
        assert_eq!(
            format!("{}", err),
            "Invalid argument: unsupported option type: FOO"
        );
    }

    #[test]
    fn test_solver_error_display() {
        let err = SolverError::DerivativeNearZero { x: 0.5 };
        assert_eq!(format!("{}", err), "Derivative near zero at x = 0.5");

        let err = SolverError::NoBracket { a: 1e-6, b: 5.0 };
        assert!(format!("{}", err).contains("same sign"));
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = PricingError::invalid_argument("x");
        let _: &dyn std::error::Error = &err;
        let err = SolverError::MaxIterationsExceeded { iterations: 3 };
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = PricingError::invalid_argument("n_samples");
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
