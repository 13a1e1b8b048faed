//! Question endpoints
//!
//! Every handler runs inside one transaction. Returning early with `?` drops
//! the transaction, which rolls it back.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use super::answers::AnswerResponse;
use crate::db::repos::{AnswerRepo, QuestionRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{ApiJson, EntityId};
use crate::http::server::AppState;
use crate::models::{
    validate_answer_fields, validate_question_text, Question, QuestionWithAnswers, ValidationError,
};

/// Create question request
#[derive(Deserialize)]
pub struct CreateQuestionRequest {
    pub text: String,
}

/// Create answer request
///
/// Missing fields read as empty strings and fail validation.
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub text: String,
}

impl CreateAnswerRequest {
    /// Decode an already-parsed JSON body. A field of the wrong type is a
    /// validation error naming the body.
    pub fn from_json(body: serde_json::Value) -> Result<Self, ApiError> {
        serde_json::from_value(body).map_err(|e| {
            ApiError::Validation(ValidationError::InvalidFormat {
                field: "body",
                reason: e.to_string(),
            })
        })
    }
}

/// Question response
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub text: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            text: q.text,
            created_at: q.created_at.to_rfc3339(),
            updated_at: q.updated_at.to_rfc3339(),
        }
    }
}

/// Question response with nested answers
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionWithAnswersResponse {
    #[serde(flatten)]
    pub question: QuestionResponse,
    pub answers: Vec<AnswerResponse>,
}

impl From<QuestionWithAnswers> for QuestionWithAnswersResponse {
    fn from(q: QuestionWithAnswers) -> Self {
        Self {
            question: QuestionResponse::from(q.question),
            answers: q.answers.into_iter().map(AnswerResponse::from).collect(),
        }
    }
}

/// GET /questions/ - list all questions, newest first
async fn list_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let questions = QuestionRepo::new(&mut tx).list_all().await?;
    tx.commit().await?;

    Ok(Json(
        questions.into_iter().map(QuestionResponse::from).collect(),
    ))
}

/// POST /questions/ - create a new question
async fn create_question(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateQuestionRequest>,
) -> Result<(StatusCode, Json<QuestionResponse>), ApiError> {
    let text = validate_question_text(&req.text)?;

    let mut tx = state.pool.begin().await?;
    let question = QuestionRepo::new(&mut tx).create(text).await?;
    tx.commit().await?;

    tracing::info!(question_id = question.id, "Question created");
    Ok((StatusCode::CREATED, Json(QuestionResponse::from(question))))
}

/// GET /questions/{id} - get a question with all of its answers
async fn get_question(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<Json<QuestionWithAnswersResponse>, ApiError> {
    let mut tx = state.pool.begin().await?;
    let question = QuestionRepo::new(&mut tx)
        .get_with_answers(id)
        .await?
        .ok_or_else(|| ApiError::not_found("question", id))?;
    tx.commit().await?;

    Ok(Json(QuestionWithAnswersResponse::from(question)))
}

/// DELETE /questions/{id} - delete a question and, by cascade, its answers
async fn delete_question(
    State(state): State<Arc<AppState>>,
    EntityId(id): EntityId,
) -> Result<StatusCode, ApiError> {
    let mut tx = state.pool.begin().await?;
    let mut repo = QuestionRepo::new(&mut tx);
    let question = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| ApiError::not_found("question", id))?;
    repo.delete(question).await?;
    tx.commit().await?;

    tracing::info!(question_id = id, "Question deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /questions/{id}/answers/ - add an answer to a question
///
/// The body is only parsed as JSON up front. Field types and values are
/// checked after the question lookup, so a missing question is always a 404.
async fn create_answer(
    State(state): State<Arc<AppState>>,
    EntityId(question_id): EntityId,
    ApiJson(body): ApiJson<serde_json::Value>,
) -> Result<(StatusCode, Json<AnswerResponse>), ApiError> {
    let mut tx = state.pool.begin().await?;

    let question = QuestionRepo::new(&mut tx)
        .get_by_id(question_id)
        .await?
        .ok_or_else(|| ApiError::not_found("question", question_id))?;

    let req = CreateAnswerRequest::from_json(body)?;
    let (user_id, text) = validate_answer_fields(&req.user_id, &req.text)?;

    let answer = AnswerRepo::new(&mut tx)
        .create(user_id, text, question.id)
        .await?;
    tx.commit().await?;

    tracing::info!(answer_id = answer.id, question_id, "Answer created");
    Ok((StatusCode::CREATED, Json(AnswerResponse::from(answer))))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/", get(list_questions).post(create_question))
        .route("/questions/{id}", get(get_question).delete(delete_question))
        .route("/questions/{id}/answers", post(create_answer))
        .route("/questions/{id}/answers/", post(create_answer))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    use crate::config::ServiceConfig;
    use crate::db::create_lazy_pool;
    use crate::http::server::build_router;

    // The pool never connects; these requests are rejected before any
    // query runs.
    fn app() -> Router {
        let config = ServiceConfig {
            database_url: Some("postgres://qa:qa@127.0.0.1:1/unreachable".into()),
            ..ServiceConfig::default()
        };
        let pool = create_lazy_pool(&config).expect("lazy pool");
        build_router(AppState::new(pool, config))
    }

    async fn post_json(uri: &str, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(
                Request::post(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_owned()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn short_text_is_rejected() {
        let (status, body) = post_json("/questions/", r#"{"text": "Hi"}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
        assert_eq!(body["message"], "text must be at least 3 characters");
    }

    #[tokio::test]
    async fn whitespace_text_is_rejected() {
        let (status, body) = post_json("/questions", r#"{"text": "    "}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["message"], "text cannot be empty");
    }

    #[tokio::test]
    async fn missing_text_field_is_rejected() {
        let (status, body) = post_json("/questions/", r#"{}"#).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "validation_error");
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() {
        let response = app()
            .oneshot(Request::get("/questions/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn answer_body_with_wrong_field_type_is_validation_error() {
        for body in [
            serde_json::json!({"user_id": null, "text": "x"}),
            serde_json::json!({"user_id": 42, "text": "valid"}),
            serde_json::json!({"user_id": "alice", "text": ["a"]}),
        ] {
            let err = CreateAnswerRequest::from_json(body).unwrap_err();
            assert!(matches!(
                err,
                ApiError::Validation(ValidationError::InvalidFormat { field: "body", .. })
            ));
        }
    }

    #[test]
    fn answer_body_missing_fields_default_to_empty() {
        let req = CreateAnswerRequest::from_json(serde_json::json!({})).unwrap();
        assert_eq!(req.user_id, "");
        assert_eq!(req.text, "");
    }

    #[test]
    fn nested_answers_are_flattened_into_question() {
        let response = QuestionWithAnswersResponse {
            question: QuestionResponse {
                id: 1,
                text: "Hello".into(),
                created_at: "2024-01-01T00:00:00+00:00".into(),
                updated_at: "2024-01-01T00:00:00+00:00".into(),
            },
            answers: vec![],
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["text"], "Hello");
        assert!(value["answers"].as_array().unwrap().is_empty());
    }
}
