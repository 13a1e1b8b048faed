//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod validation;
pub mod question;
pub mod answer;

pub use validation::{validate_answer_fields, validate_question_text, ValidationError};
pub use question::{Question, QuestionText, QuestionWithAnswers};
pub use answer::{Answer, AnswerText, AnswerUserId};
