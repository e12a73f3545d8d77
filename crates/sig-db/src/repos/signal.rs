//! Signal registry: creation with uniqueness checks, lookup, paginated listing.

use std::collections::HashMap;

use sig_core::entities::{Aspect, Signal};
use sig_core::errors::CoreError;
use sig_core::validation::{validate_signal_id, validate_signal_name};

use crate::error::DatabaseError;
use crate::repos::aspect::{ASPECT_COLS, row_to_aspect};
use crate::service::{SignalService, finish};

async fn signal_id_exists(conn: &libsql::Connection, id: i64) -> Result<bool, DatabaseError> {
    let mut rows = conn
        .query("SELECT 1 FROM signals WHERE id = ?1", [id])
        .await?;
    Ok(rows.next().await?.is_some())
}

async fn signal_name_exists(conn: &libsql::Connection, name: &str) -> Result<bool, DatabaseError> {
    let mut rows = conn
        .query("SELECT 1 FROM signals WHERE name = ?1", [name])
        .await?;
    Ok(rows.next().await?.is_some())
}

async fn insert_signal(
    conn: &libsql::Connection,
    id: i64,
    name: &str,
) -> Result<Signal, DatabaseError> {
    if signal_id_exists(conn, id).await? {
        return Err(CoreError::DuplicateIdentifier { id }.into());
    }
    if signal_name_exists(conn, name).await? {
        return Err(CoreError::DuplicateName {
            name: name.to_string(),
        }
        .into());
    }

    conn.execute(
        "INSERT INTO signals (id, name) VALUES (?1, ?2)",
        libsql::params![id, name],
    )
    .await?;

    Ok(Signal {
        id,
        name: name.to_string(),
        aspects: Vec::new(),
    })
}

/// Load one signal with its aspects, ordered by aspect id.
pub(crate) async fn fetch_signal(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Signal>, DatabaseError> {
    let mut rows = conn
        .query("SELECT id, name FROM signals WHERE id = ?1", [id])
        .await?;
    let Some(row) = rows.next().await? else {
        return Ok(None);
    };
    let name = row.get::<String>(1)?;

    let sql = format!("SELECT {ASPECT_COLS} FROM aspects WHERE signal_id = ?1 ORDER BY id");
    let mut rows = conn.query(&sql, [id]).await?;
    let mut aspects = Vec::new();
    while let Some(row) = rows.next().await? {
        aspects.push(row_to_aspect(&row)?);
    }

    Ok(Some(Signal { id, name, aspects }))
}

async fn select_page(
    conn: &libsql::Connection,
    offset: u32,
    limit: u32,
) -> Result<Vec<Signal>, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT id, name FROM signals ORDER BY id LIMIT ?1 OFFSET ?2",
            libsql::params![i64::from(limit), i64::from(offset)],
        )
        .await?;
    let mut signals = Vec::new();
    while let Some(row) = rows.next().await? {
        signals.push(Signal {
            id: row.get::<i64>(0)?,
            name: row.get::<String>(1)?,
            aspects: Vec::new(),
        });
    }
    if signals.is_empty() {
        return Ok(signals);
    }

    let sql = format!(
        "SELECT {ASPECT_COLS} FROM aspects \
         WHERE signal_id IN (SELECT id FROM signals ORDER BY id LIMIT ?1 OFFSET ?2) \
         ORDER BY id"
    );
    let mut rows = conn
        .query(&sql, libsql::params![i64::from(limit), i64::from(offset)])
        .await?;
    let mut by_signal: HashMap<i64, Vec<Aspect>> = HashMap::new();
    while let Some(row) = rows.next().await? {
        let aspect = row_to_aspect(&row)?;
        by_signal.entry(aspect.signal_id).or_default().push(aspect);
    }
    for signal in &mut signals {
        signal.aspects = by_signal.remove(&signal.id).unwrap_or_default();
    }
    Ok(signals)
}

impl SignalService {
    /// Register a new signal with a caller-assigned id and a unique name.
    ///
    /// The id is checked before the name, so a request colliding on both
    /// reports `DuplicateIdentifier`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a non-positive id or blank name,
    /// `CoreError::DuplicateIdentifier` / `CoreError::DuplicateName` on
    /// collision, or `DatabaseError` if the INSERT fails.
    pub async fn create_signal(&self, id: i64, name: &str) -> Result<Signal, DatabaseError> {
        validate_signal_id(id)?;
        validate_signal_name(name)?;

        let _gate = self.enter().await;
        let tx = self.db().begin_write().await?;
        let result = insert_signal(&tx, id, name).await;
        let signal = finish(tx, result).await?;

        tracing::info!(signal_id = id, name, "signal created");
        Ok(signal)
    }

    /// Get a signal and its aspects by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no signal has this id.
    pub async fn get_signal(&self, id: i64) -> Result<Signal, DatabaseError> {
        let _gate = self.enter().await;
        let tx = self.db().begin_read().await?;
        let result = fetch_signal(&tx, id)
            .await
            .and_then(|found| found.ok_or_else(|| CoreError::signal_not_found(id).into()));
        let signal = finish(tx, result).await?;

        tracing::debug!(signal_id = id, aspects = signal.aspects.len(), "signal loaded");
        Ok(signal)
    }

    /// List signals in ascending id order, skipping `offset` and returning at
    /// most `limit`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_signals(&self, offset: u32, limit: u32) -> Result<Vec<Signal>, DatabaseError> {
        let _gate = self.enter().await;
        let tx = self.db().begin_read().await?;
        let result = select_page(&tx, offset, limit).await;
        let signals = finish(tx, result).await?;

        tracing::debug!(offset, limit, returned = signals.len(), "listed signals");
        Ok(signals)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use pretty_assertions::assert_eq;
    use sig_core::enums::AspectType;

    #[tokio::test]
    async fn create_signal_roundtrip() {
        let svc = test_service().await;

        let signal = svc.create_signal(1, "test_signal").await.unwrap();
        assert_eq!(signal.id, 1);
        assert_eq!(signal.name, "test_signal");
        assert!(signal.aspects.is_empty());

        let fetched = svc.get_signal(1).await.unwrap();
        assert_eq!(fetched, signal);
    }

    #[tokio::test]
    async fn duplicate_id_rejected_without_mutation() {
        let svc = test_service().await;
        svc.create_signal(1, "S1").await.unwrap();

        let result = svc.create_signal(1, "other").await;
        assert!(matches!(
            result,
            Err(DatabaseError::Domain(CoreError::DuplicateIdentifier { id: 1 }))
        ));

        let all = svc.list_signals(0, 100).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "S1");
    }

    #[tokio::test]
    async fn duplicate_name_rejected() {
        let svc = test_service().await;
        svc.create_signal(1, "S1").await.unwrap();

        let result = svc.create_signal(2, "S1").await;
        assert!(matches!(
            result,
            Err(DatabaseError::Domain(CoreError::DuplicateName { ref name })) if name == "S1"
        ));
        assert!(matches!(
            svc.get_signal(2).await,
            Err(DatabaseError::Domain(CoreError::NotFound { .. }))
        ));
    }

    #[tokio::test]
    async fn id_checked_before_name() {
        let svc = test_service().await;
        svc.create_signal(1, "S1").await.unwrap();

        let result = svc.create_signal(1, "S1").await;
        assert!(matches!(
            result,
            Err(DatabaseError::Domain(CoreError::DuplicateIdentifier { .. }))
        ));
    }

    #[tokio::test]
    async fn invalid_identity_rejected() {
        let svc = test_service().await;
        assert!(matches!(
            svc.create_signal(0, "zero").await,
            Err(DatabaseError::Domain(CoreError::Validation(_)))
        ));
        assert!(matches!(
            svc.create_signal(5, "  ").await,
            Err(DatabaseError::Domain(CoreError::Validation(_)))
        ));
        assert!(svc.list_signals(0, 10).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn get_missing_signal_not_found() {
        let svc = test_service().await;
        let err = svc.get_signal(99).await.unwrap_err();
        assert_eq!(err.to_string(), "Signal with id 99 not found");
    }

    #[tokio::test]
    async fn list_signals_paginates_in_id_order() {
        let svc = test_service().await;
        for (id, name) in [(30, "C"), (10, "A"), (20, "B"), (40, "D")] {
            svc.create_signal(id, name).await.unwrap();
        }

        let ids = |signals: Vec<Signal>| signals.into_iter().map(|s| s.id).collect::<Vec<_>>();

        assert_eq!(ids(svc.list_signals(0, 100).await.unwrap()), vec![10, 20, 30, 40]);
        assert_eq!(ids(svc.list_signals(1, 2).await.unwrap()), vec![20, 30]);
        assert_eq!(ids(svc.list_signals(3, 10).await.unwrap()), vec![40]);
        assert!(svc.list_signals(10, 10).await.unwrap().is_empty());
        assert!(svc.list_signals(0, 0).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn list_signals_includes_aspects_of_each_page_entry() {
        let svc = test_service().await;
        svc.create_signal(1, "S1").await.unwrap();
        svc.create_signal(2, "S2").await.unwrap();
        svc.create_aspect(1, AspectType::Permissive).await.unwrap();
        svc.create_aspect(2, AspectType::Override).await.unwrap();
        svc.create_aspect(2, AspectType::Restrictive).await.unwrap();

        let page = svc.list_signals(1, 1).await.unwrap();
        assert_eq!(page.len(), 1);
        assert_eq!(page[0].id, 2);
        let types: Vec<_> = page[0].aspects.iter().map(|a| a.aspect_type).collect();
        assert_eq!(types, vec![AspectType::Override, AspectType::Restrictive]);

        let all = svc.list_signals(0, 10).await.unwrap();
        assert_eq!(all[0].aspects.len(), 1);
        assert_eq!(all[1].aspects.len(), 2);
    }
}
