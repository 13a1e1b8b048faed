//! Versioned schema migrations
//!
//! SQL files under `qa-server/migrations/` are embedded at compile time.
//! Each file is applied once and recorded in `_sqlx_migrations`; later runs
//! only read that table, so startup never locks `questions` or `answers`
//! once the schema is current.

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;

pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Apply any pending migrations
pub async fn run(pool: &PgPool) -> Result<(), MigrateError> {
    tracing::info!("Running migrations...");
    MIGRATOR.run(pool).await?;
    tracing::info!("Migrations complete");
    Ok(())
}
