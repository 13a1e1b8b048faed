//! Validation errors and the input validators for questions and answers
//!
//! Validators are pure: they trim, check, and hand back the trimmed value
//! wrapped in a newtype. The newtype is what repositories accept, so raw
//! request strings never reach the database.

use std::fmt;

use super::answer::{AnswerText, AnswerUserId};
use super::question::QuestionText;

/// Validation error for domain models
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Field is empty (or whitespace only) when it shouldn't be
    Empty { field: &'static str },

    /// Field is shorter than the minimum length
    TooShort { field: &'static str, min: usize },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Input could not be parsed at all (bad JSON body, non-numeric id)
    InvalidFormat { field: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooShort { field, min } => {
                write!(f, "{} must be at least {} characters", field, min)
            }
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => write!(f, "{}: {}", field, reason),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate raw question text.
///
/// Trims surrounding whitespace, then requires at least
/// [`QuestionText::MIN_LEN`] characters. The returned value holds the
/// trimmed text.
pub fn validate_question_text(raw: &str) -> Result<QuestionText, ValidationError> {
    QuestionText::new(raw)
}

/// Validate the raw fields of a new answer.
///
/// Both fields are trimmed and must be non-empty; `user_id` is additionally
/// capped at [`AnswerUserId::MAX_LEN`] characters. `user_id` is checked
/// first.
pub fn validate_answer_fields(
    user_id_raw: &str,
    text_raw: &str,
) -> Result<(AnswerUserId, AnswerText), ValidationError> {
    let user_id = AnswerUserId::new(user_id_raw)?;
    let text = AnswerText::new(text_raw)?;
    Ok((user_id, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooShort {
            field: "text",
            min: 3,
        };
        assert_eq!(err.to_string(), "text must be at least 3 characters");

        let err = ValidationError::Empty { field: "user_id" };
        assert_eq!(err.to_string(), "user_id cannot be empty");
    }

    #[test]
    fn question_text_is_trimmed() {
        let text = validate_question_text("  Hi there  ").unwrap();
        assert_eq!(text.as_str(), "Hi there");
    }

    #[test]
    fn question_text_rules() {
        assert_eq!(
            validate_question_text("   ").unwrap_err(),
            ValidationError::Empty { field: "text" }
        );
        assert_eq!(
            validate_question_text("Hi").unwrap_err(),
            ValidationError::TooShort {
                field: "text",
                min: 3
            }
        );
        assert_eq!(
            validate_question_text("  Hi \n").unwrap_err(),
            ValidationError::TooShort {
                field: "text",
                min: 3
            }
        );
        assert!(validate_question_text("Why").is_ok());
    }

    #[test]
    fn answer_fields_allow_single_characters() {
        // no length-3 rule here, unlike question text
        let (user_id, text) = validate_answer_fields(" u ", " k ").unwrap();
        assert_eq!(user_id.as_str(), "u");
        assert_eq!(text.as_str(), "k");
    }

    #[test]
    fn answer_user_id_checked_before_text() {
        let err = validate_answer_fields("  ", "").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "user_id" });

        let err = validate_answer_fields("alice", " \t ").unwrap_err();
        assert_eq!(err, ValidationError::Empty { field: "text" });
    }
}
