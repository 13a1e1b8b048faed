//! Repository implementations for database access
//!
//! Each repository follows these patterns:
//! - Borrows `&mut PgConnection` (usually the request transaction)
//! - Point lookups return `Option`; absence is not an error
//! - Deletes take the entity the caller already fetched

pub mod questions;
pub mod answers;
pub mod stats;

pub use questions::QuestionRepo;
pub use answers::AnswerRepo;
pub use stats::{ServiceStats, StatsRepo};
