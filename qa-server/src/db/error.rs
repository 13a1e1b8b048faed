//! Database error type

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: i64 },
}

impl DbError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        Self::NotFound { resource, id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_resource_and_id() {
        let err = DbError::not_found("answer", 42);
        assert_eq!(err.to_string(), "answer with id 42 not found");
    }
}
