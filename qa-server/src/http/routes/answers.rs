//! Answer endpoints
//!
//! Answers are created under their question (see `questions.rs`); this module
//! serves direct lookup and deletion by answer id.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::db::repos::AnswerRepo;
use crate::http::error::ApiError;
use crate::http::extractors::EntityId;
use crate::http::server::AppState;
use crate::models::Answer;

/// Answer response
#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Answer> for AnswerResponse {
    fn from(a: Answer) -> Self {
        Self {
            id: a.id,
            question_id: a.question_id,
            user_id: a.user_id,
            text: a.text,
            created_at: a.created_at.to_rfc3339(),
            updated_at: a.updated_at.to_rfc3339(),
        }
    }
}

/// GET /answers/{id} - get a single answer
async fn get_answer(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<AnswerResponse>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let answer = AnswerRepo::new(&mut tx)
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("answer", id))?;
    tx.commit().await?;

    Ok(Json(AnswerResponse::from(answer)))
}

/// DELETE /answers/{id} - delete a single answer
async fn delete_answer(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let mut tx = state.pool.begin().await?;
    let mut repo = AnswerRepo::new(&mut tx);
    let answer = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("answer", id))?;
    repo.delete(answer).await?;
    tx.commit().await?;

    tracing::info!(answer_id = id, "Answer deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Answer routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/answers/{id}", get(get_answer).delete(delete_answer))
}
