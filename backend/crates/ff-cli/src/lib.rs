//! ff-cli library
//!
//! Argument parsing, logging setup and command dispatch for the `fft` binary.

pub mod cli;
pub mod commands;
pub mod dispatch;
pub mod error;
pub mod logger;


pub use cli::Cli;
pub use commands::Commands;
pub use dispatch::dispatch;
pub use error::{CliError, Result as CliResult};
