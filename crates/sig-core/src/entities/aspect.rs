use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::AspectType;

/// A boolean operating state owned by exactly one signal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Aspect {
    pub id: i64,
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    pub is_on: bool,
    pub signal_id: i64,
}

impl Aspect {
    /// Whether this aspect may not be ON together with `other`.
    #[must_use]
    pub fn conflicts_with(&self, other: &Self) -> bool {
        self.signal_id == other.signal_id
            && self.is_on
            && other.is_on
            && self.aspect_type.opposing() == Some(other.aspect_type)
    }
}
