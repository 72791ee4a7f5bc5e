//! CLI argument definitions using clap
//!
//! Commands:
//! - lendquote init --config <path>
//! - lendquote serve --config <path>
//! - lendquote quote

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// lendquote - A mortgage quote engine with a validated HTTP API
#[derive(Parser, Debug)]
#[command(name = "lendquote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a starter configuration file
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./lendquote.json")]
        config: PathBuf,
    },

    /// Start the quote HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./lendquote.json")]
        config: PathBuf,
    },

    /// Compute a single quote from a JSON request on stdin
    Quote,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
