//! Meal store error types.

use thiserror::Error;

/// Errors that can occur during meal store operations.
#[derive(Debug, Error)]
pub enum MealStoreError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(sqlx::Error),

    /// Foreign key constraint violation, e.g. a meal created for a user that
    /// does not exist.
    #[error("Foreign key constraint violation: {0}")]
    ForeignKeyViolation(String),
}

impl From<sqlx::Error> for MealStoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                Self::ForeignKeyViolation(db_err.message().to_string())
            }
            _ => Self::Database(err),
        }
    }
}

/// Result type for meal store operations.
pub type MealStoreResult<T> = Result<T, MealStoreError>;
