//! Solver configuration and result types.

use num_traits::Float;

/// Configuration for root-finding algorithms.
///
/// # Type Parameters
///
/// * `T` - Floating-point type for tolerance (e.g., `f64`)
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::SolverConfig;
///
/// let config: SolverConfig<f64> = SolverConfig::default();
/// assert!(config.tolerance < 1e-8);
///
/// let custom = SolverConfig::new(1e-6, 300);
/// assert_eq!(custom.max_iterations, 300);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig<T: Float> {
    /// Convergence tolerance for root finding.
    ///
    /// The solver stops when `|f(x)| < tolerance`.
    pub tolerance: T,

    /// Maximum number of iterations.
    ///
    /// Zero is accepted: bisection then returns the initial midpoint and
    /// Newton-Raphson reports `MaxIterationsExceeded` immediately.
    pub max_iterations: usize,
}

impl<T: Float> Default for SolverConfig<T> {
    /// Default values:
    /// - `tolerance`: 1e-10
    /// - `max_iterations`: 100
    fn default() -> Self {
        Self {
            tolerance: T::from(1e-10).unwrap_or_else(T::epsilon),
            max_iterations: 100,
        }
    }
}

impl<T: Float> SolverConfig<T> {
    /// Create a new configuration with specified values.
    ///
    /// No validation is applied; a non-positive tolerance simply means the
    /// early-exit test never fires.
    pub fn new(tolerance: T, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }
}

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootEstimate<T: Float> {
    /// Best estimate of the root.
    pub root: T,
    /// Number of iterations performed.
    pub iterations: usize,
    /// Whether `|f(root)| < tolerance` was reached.
    pub converged: bool,
}
