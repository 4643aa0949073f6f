//! Root-finding solvers for numerical computation.
//!
//! Used by the implied-volatility inversion, which picks exactly one of the
//! two methods up front from the sign of the target at a probe bracket.
//!
//! ## Available Solvers
//!
//! - [`BisectionSolver`]: Bracketing method; degrades to a best-effort
//!   midpoint when the iteration budget runs out
//! - [`NewtonRaphsonSolver`]: Derivative-based; fails explicitly when the
//!   derivative collapses or the budget runs out
//!
//! ## Configuration
//!
//! Both solvers use [`SolverConfig`] for:
//! - `tolerance`: Convergence tolerance on `|f(x)|` (default: 1e-10)
//! - `max_iterations`: Maximum iteration count (default: 100)
//!
//! ## Examples
//!
//! ```
//! use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
//!
//! let f = |x: f64| x * x - 2.0;
//!
//! let bisection = BisectionSolver::new(SolverConfig::new(1e-12, 200));
//! let estimate = bisection.find_root(f, 0.0, 2.0).unwrap();
//! assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-9);
//!
//! let newton = NewtonRaphsonSolver::new(SolverConfig::default());
//! let estimate = newton.find_root(f, |x| 2.0 * x, 1.0).unwrap();
//! assert!((estimate.root - std::f64::consts::SQRT_2).abs() < 1e-10);
//! ```

mod bisection;
mod config;
mod newton_raphson;

pub use bisection::BisectionSolver;
pub use config::{RootEstimate, SolverConfig};
pub use newton_raphson::NewtonRaphsonSolver;
