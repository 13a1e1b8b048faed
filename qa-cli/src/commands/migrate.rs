//! Schema migration command

use anyhow::{Context, Result};
use clap::Parser;

use qa_server::db::{create_pool, migrations};
use qa_server::ServiceConfig;

use super::DatabaseArgs;

/// Arguments for the migrate command
#[derive(Parser, Debug, Default)]
pub struct MigrateArgs {
    #[command(flatten)]
    pub db: DatabaseArgs,
}

/// Create or update the schema, then exit
pub async fn run_migrate(config: &ServiceConfig) -> Result<()> {
    let pool = create_pool(config)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    pool.close().await;
    Ok(())
}
