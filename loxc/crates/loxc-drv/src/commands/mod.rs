//! Command modules for the loxc driver.
//!
//! Each subcommand is implemented in its own file behind the [`traits::Command`]
//! trait.

pub mod traits;

pub mod tokenize;

// Re-export command types and functions
pub use tokenize::{run_tokenize, OutputFormat, ScanStatus, TokenizeArgs};
