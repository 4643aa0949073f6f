//! # Random Number Generation Infrastructure
//!
//! This module provides the seeded pseudo-random number generator used by
//! the Monte Carlo engine.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: any nonzero seed fixes the whole draw sequence
//! - **Locality**: generators are created per call or per worker, never
//!   shared between threads
//! - **Box–Muller**: normal variates consume exactly two uniforms each, in
//!   plain and antithetic modes alike
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_pricing::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::new(12345);
//!
//! let z = rng.gen_normal();
//! assert!(z.is_finite());
//! ```

mod prng;

pub use prng::PricerRng;
