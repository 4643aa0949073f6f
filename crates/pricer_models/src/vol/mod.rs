//! Volatility inversion.
//!
//! - [`implied`]: implied volatility from an observed market price

pub mod implied;

pub use implied::{implied_volatility, ImpliedVolReport, ImpliedVolSolver, SolveMethod};
