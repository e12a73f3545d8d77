//! Validation of caller-supplied signal identity.

use crate::errors::CoreError;

/// Reject non-positive signal ids.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `id <= 0`.
pub fn validate_signal_id(id: i64) -> Result<(), CoreError> {
    if id > 0 {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "signal id must be a positive integer, got {id}"
        )))
    }
}

/// Reject blank signal names.
///
/// # Errors
///
/// Returns `CoreError::Validation` if `name` is empty or whitespace only.
pub fn validate_signal_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        Err(CoreError::Validation("signal name must not be blank".into()))
    } else {
        Ok(())
    }
}
