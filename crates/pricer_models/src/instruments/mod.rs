//! Financial instrument definitions.
//!
//! - [`OptionType`]: the four supported payoff variants
//! - [`OptionContract`]: immutable contract value with derived `d1`/`d2`
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{OptionContract, OptionType};
//!
//! let contract = OptionContract::new(OptionType::BinaryCall, 100.0, 95.0, 0.05, 0.2, 1.0, 0.0);
//! assert_eq!(contract.payoff(120.0), 1.0);
//! ```

mod contract;
mod payoff;

pub use contract::OptionContract;
pub use payoff::OptionType;
