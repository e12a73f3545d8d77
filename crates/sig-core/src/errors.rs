//! Domain error types for the signal equipment service.
//!
//! These are the outcomes a caller can act on. Storage failures are defined
//! in `sig-db` (`DatabaseError`), which wraps `CoreError` so both layers
//! surface through one `?` chain.

use thiserror::Error;

use crate::enums::AspectType;

/// Errors raised by signal registry and aspect state machine operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("{entity_type} with id {id} not found")]
    NotFound { entity_type: &'static str, id: i64 },

    /// A signal with this id already exists.
    #[error("Signal with id {id} already exists")]
    DuplicateIdentifier { id: i64 },

    /// A signal with this name already exists.
    #[error("Signal with name {name} already exists")]
    DuplicateName { name: String },

    /// Turning an aspect ON was rejected because its opposing aspect is ON.
    #[error("Cannot turn ON {aspect_type} aspect when {opposing_type} aspect is already ON")]
    MutualExclusivityViolation {
        aspect_type: AspectType,
        opposing_type: AspectType,
    },

    /// Caller input failed validation.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    #[must_use]
    pub const fn signal_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Signal",
            id,
        }
    }

    #[must_use]
    pub const fn aspect_not_found(id: i64) -> Self {
        Self::NotFound {
            entity_type: "Aspect",
            id,
        }
    }

    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "not_found",
            Self::DuplicateIdentifier { .. } => "duplicate_identifier",
            Self::DuplicateName { .. } => "duplicate_name",
            Self::MutualExclusivityViolation { .. } => "mutual_exclusivity_violation",
            Self::Validation(_) => "validation_error",
        }
    }
}
