//! CLI module for lendquote
//!
//! Provides the command-line interface:
//! - init: write a starter configuration file
//! - serve: boot the quote HTTP server
//! - quote: one-shot quote from stdin

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{init, load_config, quote, run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_json};
