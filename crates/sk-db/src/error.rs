//! Error types for sk-db

use thiserror::Error;

/// Database operation errors
#[derive(Error, Debug)]
pub enum DbError {
    /// Connection error (D001)
    #[error("[D001] Could not connect to {driver}: {message}")]
    ConnectionError { driver: String, message: String },

    /// Query execution error (D002)
    #[error("[D002] SQL execution failed: {0}")]
    ExecutionError(String),

    /// Could not create the tracking table (D003)
    #[error("[D003] Could not create migrations table: {0}")]
    CreateTable(String),

    /// Could not introspect the tracking table (D004)
    #[error("[D004] Could not read columns of migrations table: {0}")]
    Introspection(String),

    /// Tracking table violates the expected shape (D005)
    #[error("[D005] Column migrations.{column} mismatch: {actual}. Hint: expecting {expected}")]
    SchemaMismatch {
        column: &'static str,
        expected: String,
        actual: String,
    },
}

/// Result type alias for DbError
pub type DbResult<T> = Result<T, DbError>;

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        DbError::ExecutionError(err.to_string())
    }
}
