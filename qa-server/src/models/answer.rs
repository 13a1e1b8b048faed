//! Answer entity and validated answer fields

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::ValidationError;

/// Validated answer author id (trimmed, 1-100 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerUserId(String);

impl AnswerUserId {
    /// Maximum length after trimming, matching the `VARCHAR(100)` column.
    pub const MAX_LEN: usize = 100;

    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "user_id" });
        }

        if trimmed.chars().count() > Self::MAX_LEN {
            return Err(ValidationError::TooLong {
                field: "user_id",
                max: Self::MAX_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Validated answer body (trimmed, non-empty)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerText(String);

impl AnswerText {
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "text" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Answer record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub user_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_max_length() {
        let id_100 = "u".repeat(100);
        assert!(AnswerUserId::new(&id_100).is_ok());

        let id_101 = "u".repeat(101);
        let err = AnswerUserId::new(&id_101).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { max: 100, .. }));
    }

    #[test]
    fn user_id_length_measured_after_trim() {
        let padded = format!("   {}   ", "u".repeat(100));
        assert_eq!(AnswerUserId::new(&padded).unwrap().as_str().len(), 100);
    }

    #[test]
    fn text_has_no_upper_bound() {
        let long = "a".repeat(10_000);
        assert!(AnswerText::new(&long).is_ok());
    }
}
