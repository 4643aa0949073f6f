//! BSM CLI - Command Line Operations for Black-Scholes-Merton Pricing
//!
//! This is the operational entry point for the BSM pricing engine.
//!
//! # Commands
//!
//! - `bsm price` / `bsm greeks` - Analytic price and sensitivities
//! - `bsm mc` / `bsm mc-parallel` - Monte Carlo pricing
//! - `bsm iv` - Implied volatility from a market price
//! - `bsm batch` / `bsm batch-mc` - CSV batch pricing
//! - `bsm template` / `bsm validate` - CSV authoring and repair
//! - `bsm histogram` - ASCII distribution of terminal prices
//! - `bsm selftest` - Fixed-contract round trip
//! - `bsm log ...` / `bsm history export` - Journal maintenance
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate orchestrates the pricer and
//! adapter crates and owns every side effect: console output, the journal
//! file and session history.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod histogram;
pub mod journal;

pub use error::{CliError, Result};
