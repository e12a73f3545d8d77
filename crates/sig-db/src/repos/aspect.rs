//! Aspect repository and state machine.
//!
//! Each aspect is a two-state machine (OFF, ON). The only guarded
//! transition is OFF -> ON: when the aspect's type has an opposing type,
//! the transition is rejected while any aspect of the opposing type on the
//! same signal is ON. The guard read and the write share one immediate
//! transaction.
//!
//! ```text
//!        set(true), no opposing aspect ON
//!   OFF ──────────────────────────────────▶ ON
//!    ▲                                      │
//!    └──────────────── set(false) ──────────┘
//!   set(x) when already x: no-op
//! ```

use sig_core::entities::Aspect;
use sig_core::enums::AspectType;
use sig_core::errors::CoreError;
use sig_core::responses::SignalAspects;

use crate::error::DatabaseError;
use crate::helpers::{get_bool, parse_enum};
use crate::repos::signal::fetch_signal;
use crate::service::{SignalService, finish};

pub(crate) const ASPECT_COLS: &str = "id, type, is_on, signal_id";

pub(crate) fn row_to_aspect(row: &libsql::Row) -> Result<Aspect, DatabaseError> {
    Ok(Aspect {
        id: row.get::<i64>(0)?,
        aspect_type: parse_enum(&row.get::<String>(1)?)?,
        is_on: get_bool(row, 2)?,
        signal_id: row.get::<i64>(3)?,
    })
}

async fn fetch_aspect(
    conn: &libsql::Connection,
    id: i64,
) -> Result<Option<Aspect>, DatabaseError> {
    let sql = format!("SELECT {ASPECT_COLS} FROM aspects WHERE id = ?1");
    let mut rows = conn.query(&sql, [id]).await?;
    rows.next()
        .await?
        .map(|row| row_to_aspect(&row))
        .transpose()
}

/// Whether any aspect of `aspect_type` on `signal_id` is currently ON.
async fn any_on(
    conn: &libsql::Connection,
    signal_id: i64,
    aspect_type: AspectType,
) -> Result<bool, DatabaseError> {
    let mut rows = conn
        .query(
            "SELECT 1 FROM aspects WHERE signal_id = ?1 AND type = ?2 AND is_on = 1 LIMIT 1",
            libsql::params![signal_id, aspect_type.as_str()],
        )
        .await?;
    Ok(rows.next().await?.is_some())
}

async fn insert_aspect(
    conn: &libsql::Connection,
    signal_id: i64,
    aspect_type: AspectType,
) -> Result<Aspect, DatabaseError> {
    let mut rows = conn
        .query("SELECT 1 FROM signals WHERE id = ?1", [signal_id])
        .await?;
    if rows.next().await?.is_none() {
        return Err(CoreError::signal_not_found(signal_id).into());
    }

    conn.execute(
        "INSERT INTO aspects (type, is_on, signal_id) VALUES (?1, 0, ?2)",
        libsql::params![aspect_type.as_str(), signal_id],
    )
    .await?;

    Ok(Aspect {
        id: conn.last_insert_rowid(),
        aspect_type,
        is_on: false,
        signal_id,
    })
}

async fn apply_state(
    conn: &libsql::Connection,
    aspect_id: i64,
    desired_is_on: bool,
) -> Result<Aspect, DatabaseError> {
    let aspect = fetch_aspect(conn, aspect_id)
        .await?
        .ok_or_else(|| CoreError::aspect_not_found(aspect_id))?;

    if aspect.is_on == desired_is_on {
        return Ok(aspect);
    }

    if desired_is_on {
        if let Some(opposing_type) = aspect.aspect_type.opposing() {
            if any_on(conn, aspect.signal_id, opposing_type).await? {
                return Err(CoreError::MutualExclusivityViolation {
                    aspect_type: aspect.aspect_type,
                    opposing_type,
                }
                .into());
            }
        }
    }

    conn.execute(
        "UPDATE aspects SET is_on = ?1 WHERE id = ?2",
        libsql::params![i64::from(desired_is_on), aspect_id],
    )
    .await?;

    Ok(Aspect {
        is_on: desired_is_on,
        ..aspect
    })
}

impl SignalService {
    /// Create an aspect under an existing signal. New aspects are always OFF.
    ///
    /// Several aspects of the same type may exist on one signal.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the signal does not exist.
    pub async fn create_aspect(
        &self,
        signal_id: i64,
        aspect_type: AspectType,
    ) -> Result<Aspect, DatabaseError> {
        let _gate = self.enter().await;
        let tx = self.db().begin_write().await?;
        let result = insert_aspect(&tx, signal_id, aspect_type).await;
        let aspect = finish(tx, result).await?;

        tracing::info!(
            aspect_id = aspect.id,
            signal_id,
            aspect_type = %aspect_type,
            "aspect created"
        );
        Ok(aspect)
    }

    /// Get an aspect by id.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the aspect does not exist.
    pub async fn get_aspect(&self, id: i64) -> Result<Aspect, DatabaseError> {
        let _gate = self.enter().await;
        let tx = self.db().begin_read().await?;
        let result = fetch_aspect(&tx, id)
            .await
            .and_then(|found| found.ok_or_else(|| CoreError::aspect_not_found(id).into()));
        let aspect = finish(tx, result).await?;

        tracing::debug!(aspect_id = id, is_on = aspect.is_on, "aspect loaded");
        Ok(aspect)
    }

    /// Set an aspect ON or OFF, enforcing mutual exclusivity on the ON path.
    ///
    /// Setting an aspect to its current state succeeds without writing.
    /// Turning an aspect OFF is never rejected.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the aspect does not exist, or
    /// `CoreError::MutualExclusivityViolation` if an aspect of the opposing
    /// type on the same signal is ON. State is unchanged on error.
    pub async fn update_aspect_state(
        &self,
        aspect_id: i64,
        desired_is_on: bool,
    ) -> Result<Aspect, DatabaseError> {
        let _gate = self.enter().await;
        let tx = self.db().begin_write().await?;
        let result = apply_state(&tx, aspect_id, desired_is_on).await;
        let outcome = finish(tx, result).await;

        match &outcome {
            Ok(aspect) => tracing::info!(
                aspect_id,
                signal_id = aspect.signal_id,
                is_on = aspect.is_on,
                "aspect state set"
            ),
            Err(DatabaseError::Domain(
                err @ CoreError::MutualExclusivityViolation { .. },
            )) => tracing::warn!(aspect_id, %err, "aspect transition rejected"),
            Err(_) => {}
        }
        outcome
    }

    /// A signal's id and name with the `(type, is_on)` state of each aspect.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if the signal does not exist.
    pub async fn get_signal_aspects(&self, signal_id: i64) -> Result<SignalAspects, DatabaseError> {
        let _gate = self.enter().await;
        let tx = self.db().begin_read().await?;
        let result = fetch_signal(&tx, signal_id).await.and_then(|found| {
            found
                .map(|signal| SignalAspects::from(&signal))
                .ok_or_else(|| CoreError::signal_not_found(signal_id).into())
        });
        let projection = finish(tx, result).await?;

        tracing::debug!(
            signal_id,
            aspects = projection.aspects.len(),
            "signal aspects loaded"
        );
        Ok(projection)
    }
}
