//! Command line and server startup

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use crate::config::Config;
use crate::server::server::HttpServer;
use crate::utils::error::Result;
use crate::utils::logging::init_tracing;

/// Brother's Fitness AI gateway
#[derive(Debug, Parser)]
#[command(name = "gateway", version, about)]
pub struct Args {
    /// Path to the YAML configuration file
    #[arg(long, short, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    pub config: PathBuf,

    /// Override `server.host`
    #[arg(long)]
    pub host: Option<String>,

    /// Override `server.port`
    #[arg(long)]
    pub port: Option<u16>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Read a password from stdin and print its Argon2 hash for `ADMIN_PASSWORD_HASH`
    HashPassword,
}

/// Load configuration, apply CLI overrides and install logging
pub async fn load_config(args: &Args) -> Result<Config> {
    let mut config = Config::load(&args.config).await?;

    if let Some(host) = &args.host {
        config.gateway.server.host = host.clone();
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }

    Ok(config)
}

/// Run the server with the given arguments
pub async fn run_server(args: Args) -> Result<()> {
    let config = load_config(&args).await?;
    init_tracing(config.logging())?;

    info!(
        config = %args.config.display(),
        address = %config.server().address(),
        providers = config.providers().len(),
        "Starting Brother's Fitness gateway"
    );

    HttpServer::new(config)?.start().await
}
