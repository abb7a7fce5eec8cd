use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("database error: {0}")]
    Db(DbErr),
}

/// Split unique-constraint violations off from other database failures.
pub fn classify_db_err(err: DbErr) -> ModelError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => ModelError::Conflict(detail),
        _ => ModelError::Db(err),
    }
}

impl From<DbErr> for ModelError {
    fn from(err: DbErr) -> Self {
        classify_db_err(err)
    }
}
