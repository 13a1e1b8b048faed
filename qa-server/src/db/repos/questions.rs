//! Question repository
//!
//! - create: INSERT ... RETURNING the full row
//! - list_all: newest first, unpaginated
//! - delete: answers are removed by the ON DELETE CASCADE foreign key

use sqlx::PgConnection;

use crate::db::DbError;
use crate::models::{Answer, Question, QuestionText, QuestionWithAnswers};

/// Question repository
///
/// Borrows a connection rather than the pool; handlers pass `&mut tx` so all
/// calls made for one request share its transaction.
pub struct QuestionRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> QuestionRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert a question with already-trimmed text.
    pub async fn create(&mut self, text: QuestionText) -> Result<Question, DbError> {
        let question: Question = sqlx::query_as(
            r#"
            INSERT INTO questions (text)
            VALUES ($1)
            RETURNING id, text, created_at, updated_at
            "#,
        )
        .bind(text.as_str())
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(question_id = question.id, "Created question");
        Ok(question)
    }

    /// All questions, newest first. Ties on `created_at` fall back to id.
    pub async fn list_all(&mut self) -> Result<Vec<Question>, DbError> {
        let questions: Vec<Question> = sqlx::query_as(
            r#"
            SELECT id, text, created_at, updated_at
            FROM questions
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(questions)
    }

    /// Point lookup. `Ok(None)` means no such question.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Question>, DbError> {
        let question: Option<Question> = sqlx::query_as(
            r#"
            SELECT id, text, created_at, updated_at
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(question)
    }

    /// Question plus all of its answers in insertion order.
    pub async fn get_with_answers(
        &mut self,
        id: i64,
    ) -> Result<Option<QuestionWithAnswers>, DbError> {
        let Some(question) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let answers: Vec<Answer> = sqlx::query_as(
            r#"
            SELECT id, question_id, user_id, text, created_at, updated_at
            FROM answers
            WHERE question_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(question.id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(Some(QuestionWithAnswers { question, answers }))
    }

    /// Delete a question previously fetched by the caller.
    ///
    /// Dependent answers go in the same statement through the cascading
    /// foreign key. If another transaction deleted the row first this
    /// reports `NotFound`.
    pub async fn delete(&mut self, question: Question) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(question.id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("question", question.id));
        }

        tracing::debug!(question_id = question.id, "Deleted question");
        Ok(())
    }
}
