//! HTTP server command
//!
//! Runs the Q&A API until Ctrl+C or SIGTERM.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;

use qa_server::db::create_pool;
use qa_server::{run_server, ServiceConfig};

use super::DatabaseArgs;

/// Arguments for the serve command
#[derive(Parser, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind to (default: 127.0.0.1:8000)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    #[command(flatten)]
    pub db: DatabaseArgs,
}

impl ServeArgs {
    /// Flags win over file and environment values.
    pub fn apply(&self, config: &mut ServiceConfig) {
        if let Some(bind) = self.bind {
            config.bind_addr = bind;
        }
        if self.cors_permissive {
            config.cors_permissive = true;
        }
        self.db.apply(config);
    }
}

/// Run the HTTP server
pub async fn run_serve(config: ServiceConfig) -> Result<()> {
    tracing::info!("Starting {} on {}", config.app_title, config.bind_addr);

    let pool = create_pool(&config)
        .await
        .context("Failed to create database pool")?;

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
