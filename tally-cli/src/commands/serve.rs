//! HTTP server command
//!
//! Wires configuration, the connection pool, and the axum server together.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use tally_server::db::create_pool;
use tally_server::http::{run_server, ServerConfig};
use tally_server::DatabaseConfig;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5002")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Full connection string; overrides the POSTGRES_* variables
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    // DATABASE_URL wins; otherwise assemble from POSTGRES_* with defaults
    let database_url = match args.database_url {
        Some(url) => url,
        None => DatabaseConfig::from_env().url(),
    };

    tracing::info!("Starting tally server on {}", args.bind);

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Runs migrations and blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
