//! Question entity and validated question text

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::answer::Answer;
use super::ValidationError;

/// Validated question text (trimmed, at least 3 characters)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    /// Minimum length after trimming, in characters.
    pub const MIN_LEN: usize = 3;

    /// Create new question text.
    ///
    /// # Rules
    /// - Non-empty after trimming whitespace
    /// - At least 3 characters after trimming
    ///
    /// # Example
    /// ```
    /// use qa_server::models::QuestionText;
    ///
    /// assert!(QuestionText::new("Hello").is_ok());
    /// assert!(QuestionText::new("Hi").is_err());
    /// assert!(QuestionText::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "text" });
        }

        if trimmed.chars().count() < Self::MIN_LEN {
            return Err(ValidationError::TooShort {
                field: "text",
                min: Self::MIN_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for QuestionText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Question {
    pub id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Question together with all of its answers, oldest answer first
#[derive(Debug, Clone)]
pub struct QuestionWithAnswers {
    pub question: Question,
    pub answers: Vec<Answer>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_characters_not_bytes() {
        // three characters, six bytes
        assert!(QuestionText::new("äöü").is_ok());
        // two characters, four bytes
        assert!(matches!(
            QuestionText::new("äö").unwrap_err(),
            ValidationError::TooShort { min: 3, .. }
        ));
    }

    #[test]
    fn keeps_inner_whitespace() {
        let text = QuestionText::new("\t what  is this? \n").unwrap();
        assert_eq!(text.into_string(), "what  is this?");
    }
}
