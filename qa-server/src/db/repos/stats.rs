//! Service statistics for the metrics and readiness endpoints

use serde::Serialize;
use sqlx::{PgConnection, Row};

use crate::db::DbError;

/// Row counts across both tables
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceStats {
    pub questions_total: i64,
    pub answers_total: i64,
    pub unique_users: i64,
    pub avg_answers_per_question: f64,
}

impl ServiceStats {
    pub fn new(questions_total: i64, answers_total: i64, unique_users: i64) -> Self {
        Self {
            questions_total,
            answers_total,
            unique_users,
            avg_answers_per_question: average(answers_total, questions_total),
        }
    }
}

/// answers / questions rounded to two decimals, 0 when there are no questions
fn average(answers: i64, questions: i64) -> f64 {
    if questions == 0 {
        return 0.0;
    }
    let avg = answers as f64 / questions as f64;
    (avg * 100.0).round() / 100.0
}

/// Statistics repository
pub struct StatsRepo<'a> {
    conn: &'a mut PgConnection,
}

impl<'a> StatsRepo<'a> {
    pub fn new(conn: &'a mut PgConnection) -> Self {
        Self { conn }
    }

    /// Count questions, answers and distinct answer authors in one query.
    pub async fn snapshot(&mut self) -> Result<ServiceStats, DbError> {
        let row = sqlx::query(
            r#"
            SELECT
                (SELECT COUNT(*) FROM questions) AS questions_total,
                (SELECT COUNT(*) FROM answers) AS answers_total,
                (SELECT COUNT(DISTINCT user_id) FROM answers) AS unique_users
            "#,
        )
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(ServiceStats::new(
            row.try_get("questions_total")?,
            row.try_get("answers_total")?,
            row.try_get("unique_users")?,
        ))
    }

    /// Round-trip a trivial query to prove the connection works.
    pub async fn ping(&mut self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&mut *self.conn).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_without_questions_is_zero() {
        assert_eq!(ServiceStats::new(0, 0, 0).avg_answers_per_question, 0.0);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let stats = ServiceStats::new(3, 2, 1);
        assert_eq!(stats.avg_answers_per_question, 0.67);

        let stats = ServiceStats::new(4, 10, 3);
        assert_eq!(stats.avg_answers_per_question, 2.5);
    }
}
