//! Aspect type enumeration and the exclusivity table.
//!
//! Aspect types serialize as upper-case strings (`"PERMISSIVE"`), which is
//! both the wire format and the value stored in the `aspects.type` column.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// AspectType
// ---------------------------------------------------------------------------

/// Operating state kind an aspect represents on its signal.
///
/// ```text
/// PERMISSIVE  <-> RESTRICTIVE   (never both ON on one signal)
/// OVERRIDE         (no opposing type)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AspectType {
    Permissive,
    Restrictive,
    Override,
}

/// Pairs of aspect types that may not both be ON on the same signal.
///
/// The relation is symmetric; each pair is listed once.
pub const EXCLUSIVE_PAIRS: &[(AspectType, AspectType)] =
    &[(AspectType::Permissive, AspectType::Restrictive)];

impl AspectType {
    /// Every aspect type, in declaration order.
    pub const ALL: [Self; 3] = [Self::Permissive, Self::Restrictive, Self::Override];

    /// The type that may not be ON alongside this one, if any.
    #[must_use]
    pub fn opposing(self) -> Option<Self> {
        EXCLUSIVE_PAIRS.iter().find_map(|&(a, b)| {
            if a == self {
                Some(b)
            } else if b == self {
                Some(a)
            } else {
                None
            }
        })
    }

    /// Return the string representation used in SQL storage and on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Permissive => "PERMISSIVE",
            Self::Restrictive => "RESTRICTIVE",
            Self::Override => "OVERRIDE",
        }
    }
}

impl fmt::Display for AspectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive parse of user input such as `sigctl aspect create --type`.
impl FromStr for AspectType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown aspect type '{s}' (expected one of PERMISSIVE, RESTRICTIVE, OVERRIDE)"
                ))
            })
    }
}
