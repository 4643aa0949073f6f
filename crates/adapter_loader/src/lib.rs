//! # Adapter Loader (Adapter Layer)
//!
//! CSV input and output for the BSM engine:
//!
//! - [`read_contracts`]: parse `type,S,K,r,sigma,T,q` rows into contracts
//! - [`write_results`]: write priced rows with six decimal places
//! - [`write_template`]: write an example contract file
//! - [`validate_file`] / [`write_repaired`]: split a file into good and bad
//!   lines and keep only the good ones
//!
//! ## Example
//!
//! ```rust
//! use adapter_loader::{read_contracts, write_template, TEMPLATE_ROWS};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let path = dir.path().join("options.csv");
//! write_template(&path).unwrap();
//!
//! let contracts = read_contracts(&path).unwrap();
//! assert_eq!(contracts.len(), TEMPLATE_ROWS.len());
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod reader;
pub mod validate;
pub mod writer;

pub use error::LoaderError;
pub use reader::{parse_record, read_contracts, read_contracts_from, FIELD_COUNT};
pub use validate::{validate_file, validate_reader, write_repaired, ValidationReport};
pub use writer::{format_row, write_results, write_results_to, write_template, CONTRACT_COLUMNS, TEMPLATE_ROWS};
