//! CLI module for the trivia service
//!
//! Provides command-line interface for:
//! - init: Create the database tables (and optionally seed them)
//! - start: Serve the HTTP API

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{init, resolve_config, run, run_command, start};
pub use errors::{CliError, CliErrorCode, CliResult};
