//! qa-server: HTTP service for questions and answers
//!
//! Questions own their answers: deleting a question removes every answer
//! attached to it in the same transaction. Input is trimmed and validated
//! before it reaches PostgreSQL.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, ServiceConfig};
pub use http::{build_router, run_server, ApiError, AppState, ServerError};
