//! CLI command implementations
//!
//! The entry point stays thin: commands load configuration, boot the
//! server, or run the one-shot quote pipeline; nothing here holds state.

use std::fs;
use std::path::Path;

use crate::api::{self, ErrorResponse};
use crate::http_server::{HttpServer, HttpServerConfig};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_json};

/// Load and validate configuration from a JSON file
pub fn load_config(path: &Path) -> CliResult<HttpServerConfig> {
    let content = fs::read_to_string(path)
        .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

    let config: HttpServerConfig = serde_json::from_str(&content)
        .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

    validate_config(&config)?;

    Ok(config)
}

fn validate_config(config: &HttpServerConfig) -> CliResult<()> {
    if config.api_key.trim().is_empty() {
        return Err(CliError::config_error("api_key must be a non-empty string"));
    }
    if config.port == 0 {
        return Err(CliError::config_error("port must be > 0"));
    }
    Ok(())
}

/// Write a starter configuration file
pub fn init(config_path: &Path) -> CliResult<()> {
    if config_path.exists() {
        return Err(CliError::already_initialized(config_path.display().to_string()));
    }

    let starter = HttpServerConfig::with_api_key("change-me");
    let content = serde_json::to_string_pretty(&starter)
        .map_err(|e| CliError::config_error(format!("Failed to render config: {}", e)))?;
    fs::write(config_path, content)
        .map_err(|e| CliError::io_error(format!("Failed to write config: {}", e)))?;

    println!("Wrote starter config to {}", config_path.display());
    println!("Set api_key before serving.");
    Ok(())
}

/// Start the quote HTTP server
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let server = HttpServer::new(config);

    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime
        .block_on(server.start())
        .map_err(|e| CliError::boot_failed(format!("Server error: {}", e)))
}

/// Compute a single quote from a JSON request on stdin
pub fn quote() -> CliResult<()> {
    let raw = read_request()?;

    match api::handle_quote(&raw) {
        Ok(response) => {
            write_json(&response)?;
            Ok(())
        }
        Err(err) => {
            write_json(&ErrorResponse::new(err.to_string()))?;
            Err(CliError::quote_rejected(err.to_string()))
        }
    }
}

/// Parse command line arguments and dispatch
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Dispatch a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Init { config } => init(&config),
        Command::Serve { config } => serve(&config),
        Command::Quote => quote(),
    }
}
