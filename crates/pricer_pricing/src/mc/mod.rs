//! Monte Carlo pricing for European-style contracts.
//!
//! # Architecture
//!
//! ```text
//! MonteCarloPricer
//! ├── MonteCarloConfig  (sample count, seed, antithetic flag)
//! ├── PricerRng         (per-call Box–Muller generator)
//! └── PayoffSum         (undiscounted running sum)
//!
//! simulate_parallel
//! ├── partition()       (total / workers, remainder to the last chunk)
//! └── rayon workers     (one PricerRng + PayoffSum each, folded in order)
//! ```
//!
//! Samples are never stored during pricing; only [`terminal_samples`]
//! materialises draws, for histogram output.
//!
//! # Examples
//!
//! ## Plain and antithetic sampling
//!
//! ```rust
//! use pricer_models::instruments::{OptionContract, OptionType};
//! use pricer_pricing::mc::simulate;
//!
//! let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
//!
//! let plain = simulate(&call, 20_000, 42, false).unwrap();
//! let paired = simulate(&call, 20_000, 42, true).unwrap();
//! assert!((plain - 10.4506).abs() < 0.5);
//! assert!((paired - 10.4506).abs() < 0.5);
//! ```

mod config;
mod error;
mod parallel;
mod pricer;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder};
pub use error::McError;
pub use parallel::{partition, simulate_parallel};
pub use pricer::{accumulate, simulate, terminal_samples, MonteCarloPricer, PayoffSum};
