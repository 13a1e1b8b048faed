//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool with an explicit cap - no Arc<Mutex<Connection>>
//! - Repositories borrow a connection; handlers hand them the request's
//!   transaction so every request commits or rolls back as one unit
//! - Cascade deletes are enforced by the foreign key, not by application code

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repos;

pub use error::DbError;
pub use pool::{create_lazy_pool, create_pool};
pub use repos::*;
