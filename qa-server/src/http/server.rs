//! Axum server setup
//!
//! Server skeleton with:
//! - Localhost-only CORS by default
//! - Request tracing at INFO
//! - Graceful shutdown on SIGTERM/Ctrl+C

use std::sync::Arc;

use axum::http::HeaderValue;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use super::routes;
use crate::config::ServiceConfig;
use crate::db::migrations;

/// Shared application state
///
/// Holds nothing mutable: the pool hands out connections and the config is
/// read-only after startup.
pub struct AppState {
    pub pool: PgPool,
    pub config: ServiceConfig,
}

impl AppState {
    pub fn new(pool: PgPool, config: ServiceConfig) -> Arc<Self> {
        Arc::new(Self { pool, config })
    }
}

const LOCAL_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://localhost:8000",
    "http://127.0.0.1:3000",
    "http://127.0.0.1:8000",
];

fn cors_layer(permissive: bool) -> CorsLayer {
    if permissive {
        tracing::warn!("CORS: Permissive mode enabled - all origins allowed");
        return CorsLayer::permissive();
    }

    let origins = LOCAL_ORIGINS.map(HeaderValue::from_static);
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Build the application router with all routes.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = cors_layer(state.config.cors_permissive);

    Router::new()
        .merge(routes::health::router())
        .merge(routes::questions::router())
        .merge(routes::answers::router())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Run migrations and serve until a shutdown signal arrives.
///
/// # Example
///
/// ```ignore
/// let config = ServiceConfig::load(None)?;
/// let pool = create_pool(&config).await?;
/// run_server(pool, config).await?;
/// ```
pub async fn run_server(pool: PgPool, config: ServiceConfig) -> Result<(), ServerError> {
    tracing::info!("Starting {} v{}", config.app_title, config.app_version);
    tracing::info!("Debug mode: {}", config.debug);

    migrations::run(&pool).await?;

    let bind_addr = config.bind_addr;
    let app = build_router(AppState::new(pool.clone(), config));

    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!("Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, starting shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, starting shutdown");
        }
    }
}

/// Server error type
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_origins_are_valid_header_values() {
        for origin in LOCAL_ORIGINS {
            assert!(HeaderValue::from_str(origin).is_ok());
        }
    }
}
