//! Shared setup for database-backed tests
//!
//! Run with: DATABASE_URL=postgres://... cargo test -p qa-server -- --ignored

#![allow(dead_code)]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use sqlx::PgPool;
use tower::ServiceExt;

use qa_server::db::{create_pool, migrations};
use qa_server::{build_router, AppState, ServiceConfig};

pub async fn pool() -> PgPool {
    let config = ServiceConfig {
        database_url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
        ..ServiceConfig::default()
    };
    let pool = create_pool(&config).await.expect("pool creation failed");
    migrations::run(&pool).await.expect("migrations failed");
    pool
}

pub async fn app() -> (Router, PgPool) {
    let pool = pool().await;
    let router = build_router(AppState::new(pool.clone(), ServiceConfig::default()));
    (router, pool)
}

pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Count answer rows that belong to `question_id`.
pub async fn answer_count(pool: &PgPool, question_id: i64) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers WHERE question_id = $1")
        .bind(question_id)
        .fetch_one(pool)
        .await
        .unwrap();
    count
}

/// Count questions whose stored text is exactly `text`.
pub async fn question_count_with_text(pool: &PgPool, text: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM questions WHERE text = $1")
        .bind(text)
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
