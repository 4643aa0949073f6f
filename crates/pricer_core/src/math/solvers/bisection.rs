//! Bisection root-finding solver.

use super::{RootEstimate, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Bisection root finder with best-effort termination.
///
/// Halves a sign-changing bracket until `|f(mid)| < tolerance`. When the
/// iteration budget is exhausted the midpoint of the final bracket is
/// returned with `converged == false` rather than an error.
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{BisectionSolver, SolverConfig};
///
/// let solver = BisectionSolver::new(SolverConfig::new(1e-12, 200));
///
/// // Solve x³ - x - 2 = 0 in bracket [1, 2]
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let estimate = solver.find_root(f, 1.0, 2.0).unwrap();
/// assert!(estimate.converged);
/// assert!(f(estimate.root).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct BisectionSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
}

impl<T: Float> BisectionSolver<T> {
    /// Create a new bisection solver with the given configuration.
    pub fn new(config: SolverConfig<T>) -> Self {
        Self { config }
    }

    /// Find a root of `f` in the bracket [lo, hi].
    ///
    /// Evaluates both endpoints, then delegates to
    /// [`find_root_bracketed`](Self::find_root_bracketed).
    ///
    /// # Errors
    ///
    /// `SolverError::NoBracket` if `f(lo)·f(hi) > 0`.
    pub fn find_root<F>(&self, f: F, lo: T, hi: T) -> Result<RootEstimate<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let f_lo = f(lo);
        let f_hi = f(hi);
        self.find_root_bracketed(f, (lo, f_lo), (hi, f_hi))
    }

    /// Find a root given pre-evaluated endpoints `(x, f(x))`.
    ///
    /// A product `f(lo)·f(hi) <= 0` (including an endpoint that is itself a
    /// root) is accepted as a bracket. At each step the half whose lower
    /// endpoint changes sign against the midpoint is kept.
    ///
    /// # Errors
    ///
    /// `SolverError::NoBracket` if `f(lo)·f(hi) > 0`.
    pub fn find_root_bracketed<F>(
        &self,
        f: F,
        lower: (T, T),
        upper: (T, T),
    ) -> Result<RootEstimate<T>, SolverError>
    where
        F: Fn(T) -> T,
    {
        let (mut lo, mut f_lo) = lower;
        let (mut hi, f_hi) = upper;

        if f_lo * f_hi > T::zero() {
            return Err(SolverError::NoBracket {
                a: lo.to_f64().unwrap_or(f64::NAN),
                b: hi.to_f64().unwrap_or(f64::NAN),
            });
        }

        let half = T::from(0.5).unwrap_or_else(T::nan);

        for iteration in 0..self.config.max_iterations {
            let mid = half * (lo + hi);
            let f_mid = f(mid);

            if f_mid.abs() < self.config.tolerance {
                return Ok(RootEstimate {
                    root: mid,
                    iterations: iteration + 1,
                    converged: true,
                });
            }

            if f_lo * f_mid <= T::zero() {
                hi = mid;
            } else {
                lo = mid;
                f_lo = f_mid;
            }
        }

        Ok(RootEstimate {
            root: half * (lo + hi),
            iterations: self.config.max_iterations,
            converged: false,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
