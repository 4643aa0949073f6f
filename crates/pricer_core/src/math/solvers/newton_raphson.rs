//! Newton-Raphson root-finding solver.

use super::{RootEstimate, SolverConfig};
use crate::types::SolverError;
use num_traits::Float;

/// Newton-Raphson root finder with an explicit derivative.
///
/// Uses Newton's method: `x_{n+1} = x_n - f(x_n) / f'(x_n)` for fast
/// quadratic convergence on smooth functions.
///
/// # Type Parameters
///
/// * `T` - Floating-point type (e.g., `f64`)
///
/// # Safeguards
///
/// - `min_derivative`: the step is refused when `|f'(x)|` falls below it
///   (default 1e-30)
/// - `positive_floor`: when set, any non-positive iterate is replaced by the
///   floor before the next evaluation
///
/// # Example
///
/// ```
/// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
///
/// // Solve x² - 2 = 0 (find √2)
/// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
///
/// let f = |x: f64| x * x - 2.0;
/// let f_prime = |x: f64| 2.0 * x;
///
/// let estimate = solver.find_root(f, f_prime, 1.0).unwrap();
/// assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct NewtonRaphsonSolver<T: Float> {
    /// Solver configuration
    config: SolverConfig<T>,
    /// Smallest derivative magnitude a step may divide by
    min_derivative: T,
    /// Replacement for non-positive iterates
    positive_floor: Option<T>,
}

impl<T: Float> NewtonRaphsonSolver<T> {
    /// Create a new Newton-Raphson solver with the given configuration.
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver: NewtonRaphsonSolver<f64> = NewtonRaphsonSolver::new(SolverConfig::default());
    /// ```
    pub fn new(config: SolverConfig<T>) -> Self {
        Self {
            config,
            min_derivative: T::from(1e-30).unwrap_or_else(T::min_positive_value),
            positive_floor: None,
        }
    }

    /// Set the derivative magnitude below which iteration aborts.
    pub fn with_min_derivative(mut self, min_derivative: T) -> Self {
        self.min_derivative = min_derivative;
        self
    }

    /// Keep iterates strictly positive by replacing `x <= 0` with `floor`.
    pub fn with_positive_floor(mut self, floor: T) -> Self {
        self.positive_floor = Some(floor);
        self
    }

    /// Find a root of `f` using explicit derivative `f_prime`.
    ///
    /// # Arguments
    ///
    /// * `f` - Function to find root of
    /// * `f_prime` - Derivative of f
    /// * `x0` - Initial guess
    ///
    /// # Returns
    ///
    /// * `Ok(estimate)` - Root where `|f(x)| < tolerance`
    /// * `Err(SolverError::MaxIterationsExceeded)` - Failed to converge
    /// * `Err(SolverError::DerivativeNearZero)` - Derivative too small
    /// * `Err(SolverError::NumericalInstability)` - Iterate became non-finite
    ///
    /// # Example
    ///
    /// ```
    /// use pricer_core::math::solvers::{NewtonRaphsonSolver, SolverConfig};
    ///
    /// let solver = NewtonRaphsonSolver::new(SolverConfig::default());
    ///
    /// // Solve x³ - x - 2 = 0
    /// let f = |x: f64| x * x * x - x - 2.0;
    /// let f_prime = |x: f64| 3.0 * x * x - 1.0;
    ///
    /// let estimate = solver.find_root(f, f_prime, 1.5).unwrap();
    /// assert!(f(estimate.root).abs() < 1e-10);
    /// ```
    pub fn find_root<F, G>(
        &self,
        f: F,
        f_prime: G,
        x0: T,
    ) -> Result<RootEstimate<T>, SolverError>
    where
        F: Fn(T) -> T,
        G: Fn(T) -> T,
    {
        let mut x = x0;

        for iteration in 0..self.config.max_iterations {
            let f_val = f(x);

            if f_val.abs() < self.config.tolerance {
                return Ok(RootEstimate {
                    root: x,
                    iterations: iteration,
                    converged: true,
                });
            }

            let f_prime_val = f_prime(x);

            if f_prime_val.abs() < self.min_derivative {
                return Err(SolverError::DerivativeNearZero {
                    x: x.to_f64().unwrap_or(f64::NAN),
                });
            }

            x = x - f_val / f_prime_val;

            if let Some(floor) = self.positive_floor {
                if x <= T::zero() {
                    x = floor;
                }
            }

            if !x.is_finite() {
                return Err(SolverError::NumericalInstability(
                    "Newton iteration produced non-finite value".to_string(),
                ));
            }
        }

        Err(SolverError::MaxIterationsExceeded {
            iterations: self.config.max_iterations,
        })
    }

    /// Returns a reference to the solver configuration.
    pub fn config(&self) -> &SolverConfig<T> {
        &self.config
    }
}
