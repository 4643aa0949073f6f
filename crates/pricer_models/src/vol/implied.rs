//! Black-Scholes-Merton implied-volatility inversion.
//!
//! The solver probes the pricing function at two fixed volatilities and
//! decides once, up front, which root finder to run:
//!
//! - **Bracketed** (`f(lo)·f(hi) <= 0`): bisection on `[1e-6, 5.0]`. Running
//!   out of iterations is not a failure; the midpoint of the final bracket is
//!   returned.
//! - **Not bracketed**: Newton-Raphson on vega from a clamped initial guess.
//!   Vega below 1e-8 (negative vega included) or running out of iterations
//!   reports "not found".
//!
//! The method never switches mid-solve. Volatilities outside the probe
//! bracket are therefore unreachable by bisection, and Newton may miss
//! far out-of-the-money volatilities from its clamped start.

use pricer_core::math::solvers::{BisectionSolver, NewtonRaphsonSolver, SolverConfig};
use pricer_core::types::SolverError;

use crate::analytical::black_scholes::{price, vega};
use crate::instruments::OptionContract;

/// Lower probe volatility.
pub const SIGMA_LOWER: f64 = 1e-6;
/// Upper probe volatility.
pub const SIGMA_UPPER: f64 = 5.0;

/// Newton aborts once signed vega falls below this.
const MIN_VEGA: f64 = 1e-8;
/// Non-positive Newton iterates are reset to this.
const SIGMA_FLOOR: f64 = 1e-6;
/// Newton start when the contract carries no usable volatility.
const DEFAULT_GUESS: f64 = 0.2;
/// Bounds applied to the Newton start.
const GUESS_BOUNDS: (f64, f64) = (1e-3, 1.0);

/// Root finder chosen for a solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveMethod {
    /// Market price was non-positive; nothing was run.
    NotAttempted,
    /// Probe bracket showed a sign change.
    Bisection,
    /// Probe bracket showed no sign change.
    NewtonRaphson,
}

/// Full outcome of an implied-volatility solve.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpliedVolReport {
    /// Implied volatility, or `None` when not found.
    pub volatility: Option<f64>,
    /// Which root finder ran.
    pub method: SolveMethod,
    /// Iterations performed (zero when nothing ran or Newton aborted early).
    pub iterations: usize,
    /// Whether the pricing error fell below tolerance.
    pub converged: bool,
    /// Why Newton-Raphson gave up, if it did.
    pub failure: Option<SolverError>,
}

impl ImpliedVolReport {
    fn not_attempted() -> Self {
        Self {
            volatility: None,
            method: SolveMethod::NotAttempted,
            iterations: 0,
            converged: false,
            failure: None,
        }
    }
}

/// Implied-volatility solver.
///
/// # Examples
/// ```
/// use pricer_models::analytical::price;
/// use pricer_models::instruments::{OptionContract, OptionType};
/// use pricer_models::vol::ImpliedVolSolver;
///
/// let contract = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
/// let market = price(&contract);
///
/// let iv = ImpliedVolSolver::new(1e-6, 200).solve(&contract, market).unwrap();
/// assert!((iv - 0.2).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImpliedVolSolver {
    config: SolverConfig<f64>,
}

impl Default for ImpliedVolSolver {
    /// Tolerance 1e-6 on the price error, 200 iterations.
    fn default() -> Self {
        Self::new(1e-6, 200)
    }
}

impl ImpliedVolSolver {
    /// Creates a solver with a price tolerance and iteration budget.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            config: SolverConfig::new(tolerance, max_iterations),
        }
    }

    /// Returns the solver configuration.
    pub fn config(&self) -> &SolverConfig<f64> {
        &self.config
    }

    /// Implied volatility of `contract` at `market_price`, or `None`.
    pub fn solve(&self, contract: &OptionContract, market_price: f64) -> Option<f64> {
        self.solve_detailed(contract, market_price).volatility
    }

    /// Like [`solve`](Self::solve), also reporting how the answer was reached.
    pub fn solve_detailed(&self, contract: &OptionContract, market_price: f64) -> ImpliedVolReport {
        if market_price <= 0.0 {
            return ImpliedVolReport::not_attempted();
        }

        let objective = |sigma: f64| price(&contract.with_volatility(sigma)) - market_price;

        let f_lo = objective(SIGMA_LOWER);
        let f_hi = objective(SIGMA_UPPER);

        if f_lo * f_hi > 0.0 {
            self.newton(contract, objective)
        } else {
            self.bisection(objective, f_lo, f_hi)
        }
    }

    fn bisection<F>(&self, objective: F, f_lo: f64, f_hi: f64) -> ImpliedVolReport
    where
        F: Fn(f64) -> f64,
    {
        let solver = BisectionSolver::new(self.config);
        match solver.find_root_bracketed(objective, (SIGMA_LOWER, f_lo), (SIGMA_UPPER, f_hi)) {
            Ok(estimate) => ImpliedVolReport {
                volatility: Some(estimate.root),
                method: SolveMethod::Bisection,
                iterations: estimate.iterations,
                converged: estimate.converged,
                failure: None,
            },
            Err(err) => ImpliedVolReport {
                volatility: None,
                method: SolveMethod::Bisection,
                iterations: 0,
                converged: false,
                failure: Some(err),
            },
        }
    }

    fn newton<F>(&self, contract: &OptionContract, objective: F) -> ImpliedVolReport
    where
        F: Fn(f64) -> f64,
    {
        let guess = if contract.volatility() > 0.0 {
            contract.volatility()
        } else {
            DEFAULT_GUESS
        };
        let start = guess.clamp(GUESS_BOUNDS.0, GUESS_BOUNDS.1);

        let solver = NewtonRaphsonSolver::new(self.config)
            .with_min_derivative(MIN_VEGA)
            .with_positive_floor(SIGMA_FLOOR);
        // The solver floors |f'|; mapping negative vega to zero makes the
        // floor apply to the signed value
        let slope = |sigma: f64| {
            let v = vega(&contract.with_volatility(sigma));
            if v < 0.0 {
                0.0
            } else {
                v
            }
        };

        match solver.find_root(objective, slope, start) {
            Ok(estimate) => ImpliedVolReport {
                volatility: Some(estimate.root),
                method: SolveMethod::NewtonRaphson,
                iterations: estimate.iterations,
                converged: true,
                failure: None,
            },
            Err(err) => ImpliedVolReport {
                volatility: None,
                method: SolveMethod::NewtonRaphson,
                iterations: match err {
                    SolverError::MaxIterationsExceeded { iterations } => iterations,
                    _ => 0,
                },
                converged: false,
                failure: Some(err),
            },
        }
    }
}

/// Implied volatility with an explicit tolerance and iteration budget.
///
/// Shorthand for `ImpliedVolSolver::new(tolerance, max_iterations).solve(..)`.
pub fn implied_volatility(
    contract: &OptionContract,
    market_price: f64,
    tolerance: f64,
    max_iterations: usize,
) -> Option<f64> {
    ImpliedVolSolver::new(tolerance, max_iterations).solve(contract, market_price)
}
