//! HTTP server command

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use prodcat_core::AppConfig;
use prodcat_server::db::Store;
use prodcat_server::http::{run_server, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Document store connection string (overrides config)
    #[arg(long, env = "MONGODB_URI")]
    pub database_url: Option<String>,

    /// Database name (overrides config)
    #[arg(long)]
    pub database: Option<String>,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = AppConfig::load().context("Failed to load configuration")?;

    if let Some(bind) = args.bind {
        config.server.bind = bind;
    }
    if let Some(url) = args.database_url {
        config.store.uri = url;
    }
    if let Some(database) = args.database {
        config.store.database = database;
    }

    tracing::info!("Starting prodcat server on {}", config.server.bind);

    let store = Store::from_config(&config.store);
    let server_config = ServerConfig {
        bind_addr: config.server.bind,
    };

    // Run server (blocks until shutdown)
    run_server(store, server_config)
        .await
        .context("Server error")?;

    Ok(())
}
