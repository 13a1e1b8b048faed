//! Service index, health, liveness, readiness and metrics endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

use crate::db::repos::{ServiceStats, StatsRepo};
use crate::db::DbError;
use crate::http::error::ApiError;
use crate::http::server::AppState;

/// Service index response
#[derive(Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub health: &'static str,
}

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub version: String,
}

/// Liveness response
#[derive(Serialize)]
pub struct LiveResponse {
    pub status: &'static str,
}

/// Readiness response
#[derive(Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub service: String,
}

/// GET / - service name plus where to look next
async fn root(State(state): State<Arc<AppState>>) -> Json<RootResponse> {
    Json(RootResponse {
        message: state.config.app_title.clone(),
        version: state.config.app_version.clone(),
        health: "/health",
    })
}

/// GET /health
async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: state.config.app_title.clone(),
        version: state.config.app_version.clone(),
    })
}

/// GET /live
async fn live() -> Json<LiveResponse> {
    Json(LiveResponse { status: "alive" })
}

/// GET /ready - 503 until the database answers
async fn ready(State(state): State<Arc<AppState>>) -> (StatusCode, Json<ReadyResponse>) {
    let check = async {
        let mut conn = state.pool.acquire().await?;
        StatsRepo::new(&mut conn).ping().await?;
        Ok::<_, DbError>(())
    };

    match check.await {
        Ok(()) => {
            tracing::debug!("Database connection check: OK");
            (
                StatusCode::OK,
                Json(ReadyResponse {
                    status: "ready",
                    database: "connected",
                    service: state.config.app_title.clone(),
                }),
            )
        }
        Err(e) => {
            tracing::error!("Database connection check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadyResponse {
                    status: "not ready",
                    database: "disconnected",
                    service: state.config.app_title.clone(),
                }),
            )
        }
    }
}

/// GET /metrics - row counts across questions and answers
async fn metrics(State(state): State<Arc<AppState>>) -> Result<Json<ServiceStats>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let stats = StatsRepo::new(&mut tx).snapshot().await?;
    tx.commit().await?;

    tracing::debug!(
        questions = stats.questions_total,
        answers = stats.answers_total,
        users = stats.unique_users,
        "Metrics collected"
    );
    Ok(Json(stats))
}

/// Index and health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/live", get(live))
        .route("/ready", get(ready))
        .route("/metrics", get(metrics))
}
