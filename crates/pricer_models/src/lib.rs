//! # Pricer Models (L2: Business Logic)
//!
//! Option contracts, closed-form valuation and implied volatility.
//!
//! This crate provides:
//! - Contract definitions: [`instruments::OptionType`] and
//!   [`instruments::OptionContract`]
//! - Black-Scholes-Merton prices and Greeks ([`analytical`])
//! - Implied-volatility inversion ([`vol`])
//!
//! ## Design Principles
//!
//! - **Immutable contracts**: "what-if" pricing builds a new value
//! - **Closed variant set** for exhaustive static dispatch
//! - **Numeric sentinels**: NaN for undefined Greeks, `None` for an implied
//!   volatility that could not be found
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_models::analytical::{greeks, price};
//! use pricer_models::instruments::{OptionContract, OptionType};
//! use pricer_models::vol::implied_volatility;
//!
//! let call = OptionContract::new(OptionType::EuropeanCall, 100.0, 100.0, 0.05, 0.2, 1.0, 0.0);
//! let value = price(&call);
//! assert!((value - 10.4506).abs() < 1e-3);
//!
//! let sensitivities = greeks(&call);
//! assert!(sensitivities.vega > 37.0);
//!
//! let iv = implied_volatility(&call, value, 1e-6, 200).unwrap();
//! assert!((iv - 0.2).abs() < 1e-4);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod vol;
