//! Numerical building blocks.
//!
//! - [`distributions`]: standard normal PDF and CDF (Abramowitz–Stegun)
//! - [`solvers`]: bracketing and derivative-based root finders

pub mod distributions;
pub mod solvers;

pub use distributions::{norm_cdf, norm_pdf};
