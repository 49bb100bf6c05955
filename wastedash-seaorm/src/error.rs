//! Error types for database access.

use thiserror::Error;

/// Errors raised while talking to the database.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not be created or a connection was lost.
    #[error("Connection error: {0}")]
    Connection(String),

    /// A statement failed.
    #[error("Query error: {0}")]
    Query(#[from] sea_orm::DbErr),

    /// A multi-statement script failed and was rolled back.
    #[error("Transaction error: {0}")]
    Transaction(String),

    /// Invalid connection or procedure settings.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for database operations.
pub type DatabaseResult<T> = Result<T, DatabaseError>;

impl From<DatabaseError> for wastedash_core::Error {
    fn from(err: DatabaseError) -> Self {
        wastedash_core::Error::Database(err.to_string())
    }
}
