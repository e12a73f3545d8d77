//! Database error types for sig-db.

use sig_core::errors::CoreError;
use thiserror::Error;

/// Errors from storage operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// A domain rule rejected the operation (not found, duplicate, exclusivity, validation).
    #[error(transparent)]
    Domain(#[from] CoreError),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// Invalid state encountered (e.g., bad data in DB).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),
}

