//! Service layer running registry and state machine operations in transactions.
//!
//! `SignalService` wraps `SignalDb`. All repo methods are implemented as
//! `impl SignalService` blocks in `crate::repos`.

use tokio::sync::{Mutex, MutexGuard};

use crate::SignalDb;
use crate::error::DatabaseError;

/// Runs every operation as one transaction on the shared connection.
///
/// Every operation follows this protocol:
/// 1. Acquire the operation gate
/// 2. Begin transaction (immediate for mutations, deferred for reads)
/// 3. Execute SQL, including any cross-row guard checks
/// 4. Commit on success, roll back on error
///
/// The gate serializes transactions on the single connection, so a guard
/// read and the write it protects can never interleave with another
/// operation.
pub struct SignalService {
    db: SignalDb,
    gate: Mutex<()>,
}

impl SignalService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = SignalDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create a service over a remote libSQL database.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be reached.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = SignalDb::open_remote(url, auth_token).await?;
        Ok(Self::from_db(db))
    }

    /// Create from an existing `SignalDb`.
    #[must_use]
    pub fn from_db(db: SignalDb) -> Self {
        Self {
            db,
            gate: Mutex::new(()),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &SignalDb {
        &self.db
    }

    pub(crate) async fn enter(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().await
    }
}

/// Commit `tx` if `result` is `Ok`, otherwise roll it back and return the error.
pub(crate) async fn finish<T>(
    tx: libsql::Transaction,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    match result {
        Ok(value) => {
            tx.commit().await?;
            Ok(value)
        }
        Err(error) => {
            if let Err(rollback_error) = tx.rollback().await {
                tracing::warn!(%rollback_error, %error, "transaction rollback failed");
            }
            Err(error)
        }
    }
}
