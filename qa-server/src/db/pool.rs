//! Connection pool sized from `ServiceConfig`

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::ServiceConfig;

pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a request waits for a free connection before failing with 500
pub const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool options for this service: `max_connections` from config, bounded
/// acquire wait.
pub fn pool_options(config: &ServiceConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
}

/// Connect to the database named by `config.database_url()`.
///
/// Fails if the first connection cannot be established.
pub async fn create_pool(config: &ServiceConfig) -> Result<PgPool, sqlx::Error> {
    tracing::debug!(
        max_connections = config.max_connections,
        host = %config.postgres_host,
        "Connecting to database"
    );
    pool_options(config).connect(&config.database_url()).await
}

/// Pool that connects on first use. Startup never touches the database.
pub fn create_lazy_pool(config: &ServiceConfig) -> Result<PgPool, sqlx::Error> {
    pool_options(config).connect_lazy(&config.database_url())
}
