//! # pricer_core: Mathematical Foundation for the BSM Pricing Engine
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Standard normal density and cumulative distribution (`math::distributions`)
//! - Root-finding solvers: bisection and Newton-Raphson (`math::solvers`)
//! - Error types: `PricingError`, `SolverError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::{norm_cdf, norm_pdf};
//!
//! let p = norm_cdf(1.96_f64);
//! assert!((p - 0.975).abs() < 1e-3);
//!
//! let density = norm_pdf(0.0_f64);
//! assert!((density - 0.398_942_280_4).abs() < 1e-9);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for error types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
