//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form Black-Scholes-Merton valuation for the
//! four supported payoff variants together with the analytic Greeks.
//!
//! ## Design Principles
//!
//! - **Structured Greeks**: callers read named fields, never parse text
//! - **NaN for undefined**: Greeks at maturity and d₁ at σ <= 0 signal NaN
//!   rather than an error

pub mod black_scholes;

pub use black_scholes::{greeks, price, vega, Greeks};
