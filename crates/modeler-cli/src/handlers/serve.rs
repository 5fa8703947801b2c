//! Serve command handler.
//!
//! Starts the HTTP API.

use std::net::IpAddr;

use anyhow::Result;
use modeler_axum::{ServerConfig, start_server};

use crate::error::CliError;

/// Options collected from `modeler serve`.
#[derive(Debug, Clone)]
pub struct ServeArgs {
    pub port: u16,
    pub bind: IpAddr,
    pub user_header: String,
    pub allow_origins: Vec<String>,
}

impl ServeArgs {
    /// Server configuration for these options. No explicit origins means
    /// every origin is allowed.
    pub fn into_config(self) -> Result<ServerConfig, CliError> {
        let config = ServerConfig::with_defaults()
            .with_bind(self.bind)
            .with_port(self.port)
            .with_user_header(&self.user_header)
            .map_err(|e| {
                CliError::Config(format!("invalid user header '{}': {e}", self.user_header))
            })?;
        if self.allow_origins.is_empty() {
            Ok(config)
        } else {
            Ok(config.with_allowed_origins(self.allow_origins))
        }
    }
}

/// Execute the serve command. Runs until the process is stopped.
pub async fn execute(args: ServeArgs) -> Result<()> {
    let config = args.into_config()?;

    println!();
    println!("  modeler web server starting...");
    println!();
    println!("  API:  http://{}:{}/rest", config.bind, config.port);
    println!("  User header: {}", config.user_header);
    println!();
    println!("  Press Ctrl+C to stop");
    println!();

    start_server(config).await
}
