//! Raffle database error types

use raffle_core::ActionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Query error: {0}")]
    QueryError(String),

    /// Update or delete matched no row; carries the entity name
    #[error("Entity not found: {0}")]
    NotFound(String),

    /// Unique constraint violation
    #[error("Entity already exists: {0}")]
    AlreadyExists(String),

    #[error("Schema error: {0}")]
    SchemaError(String),

    /// Stored value that does not map onto a domain type
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DbError::AlreadyExists(db_err.message().to_string())
            }
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                DbError::Connection(err.to_string())
            }
            _ => DbError::QueryError(err.to_string()),
        }
    }
}

impl From<DbError> for ActionError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::AlreadyExists(msg) => ActionError::Conflict(msg),
            DbError::NotFound(entity) => ActionError::not_found(entity, ""),
            other => ActionError::Internal(other.to_string()),
        }
    }
}

pub type DbResult<T> = Result<T, DbError>;
