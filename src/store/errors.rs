//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures raised by a [`QuestionStore`](super::QuestionStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// Error reported by the SQL driver
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Question references a category that does not exist
    #[error("category {0} does not exist")]
    ForeignKey(i64),

    /// Store refused the operation (used by the in-memory store)
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            StoreError::ForeignKey(42).to_string(),
            "category 42 does not exist"
        );
        assert_eq!(
            StoreError::Unavailable("writes disabled".into()).to_string(),
            "store unavailable: writes disabled"
        );
    }

    #[test]
    fn test_from_sqlx_error() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(_)));
    }
}
