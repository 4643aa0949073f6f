//! # Pricer Pricing (Layer 3: Simulation Engine)
//!
//! ## Layer 3 Role
//!
//! pricer_pricing holds the stochastic side of the engine:
//! - Seeded pseudo-random generation with Box–Muller normals ([`rng`])
//! - Single-threaded Monte Carlo pricing, plain or antithetic ([`mc`])
//! - A fork/join coordinator splitting a sample budget across workers
//! - Terminal-price sampling for histogram output
//!
//! ## Layer Integration
//!
//! - Layer 1 (pricer_core): `PricingError`
//! - Layer 2 (pricer_models): `OptionContract`, payoff evaluation, discounting
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_models::analytical::price;
//! use pricer_models::instruments::{OptionContract, OptionType};
//! use pricer_pricing::mc::{simulate, simulate_parallel};
//!
//! let put = OptionContract::new(OptionType::EuropeanPut, 100.0, 110.0, 0.03, 0.25, 0.5, 0.0);
//!
//! let serial = simulate(&put, 50_000, 42, true).unwrap();
//! let parallel = simulate_parallel(&put, 50_000, 4, 42).unwrap();
//!
//! assert!((serial - price(&put)).abs() < 0.3);
//! assert!((parallel - price(&put)).abs() < 0.3);
//! ```
//!
//! ## Logging
//!
//! The parallel coordinator emits `tracing` debug events for its partition
//! and for each finished worker. No subscriber is installed here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod rng;
