//! Answer repository

use sqlx::PgConnection;

use crate::db::DbError;
use crate::models::{Answer, AnswerText, AnswerUserId};

/// Answer repository
pub struct AnswerRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> AnswerRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Insert an answer for `question_id`.
    ///
    /// Does not check that the question exists; callers look it up first in
    /// the same transaction. A dangling id is rejected by the foreign key and
    /// comes back as `DbError::Sqlx`.
    pub async fn create(
        &mut self,
        user_id: AnswerUserId,
        text: AnswerText,
        question_id: i64,
    ) -> Result<Answer, DbError> {
        let answer: Answer = sqlx::query_as(
            r#"
            INSERT INTO answers (question_id, user_id, text)
            VALUES ($1, $2, $3)
            RETURNING id, question_id, user_id, text, created_at, updated_at
            "#,
        )
        .bind(question_id)
        .bind(user_id.as_str())
        .bind(text.as_str())
        .fetch_one(&mut *self.conn)
        .await?;

        tracing::debug!(answer_id = answer.id, question_id, "Created answer");
        Ok(answer)
    }

    /// Point lookup. `Ok(None)` means no such answer.
    pub async fn get_by_id(&mut self, id: i64) -> Result<Option<Answer>, DbError> {
        let answer: Option<Answer> = sqlx::query_as(
            r#"
            SELECT id, question_id, user_id, text, created_at, updated_at
            FROM answers
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(answer)
    }

    /// Delete exactly this answer.
    pub async fn delete(&mut self, answer: Answer) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM answers WHERE id = $1")
            .bind(answer.id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("answer", answer.id));
        }

        tracing::debug!(answer_id = answer.id, "Deleted answer");
        Ok(())
    }
}
