//! Error handling utilities for repositories

use sqlx::postgres::PgQueryResult;
use sqlx::Error as SqlxError;
use tale_core::error::DomainError;
use tale_core::traits::RepoResult;

/// Any driver failure is a dependency failure
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Unique violations become the caller's conflict error
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    match e.as_database_error() {
        Some(db_err) if db_err.is_unique_violation() => on_unique(),
        _ => map_db_error(e),
    }
}

/// An UPDATE or DELETE that touched no row targeted a missing entity
pub fn ensure_affected<F>(result: &PgQueryResult, not_found: F) -> RepoResult<()>
where
    F: FnOnce() -> DomainError,
{
    if result.rows_affected() == 0 {
        return Err(not_found());
    }
    Ok(())
}
