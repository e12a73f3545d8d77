//! Read-only projections returned by `get_signal_aspects`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Aspect, Signal};
use crate::enums::AspectType;

/// The `(type, is_on)` pair of one aspect.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AspectState {
    #[serde(rename = "type")]
    pub aspect_type: AspectType,
    pub is_on: bool,
}

impl From<&Aspect> for AspectState {
    fn from(aspect: &Aspect) -> Self {
        Self {
            aspect_type: aspect.aspect_type,
            is_on: aspect.is_on,
        }
    }
}

/// A signal's identity together with the state of each of its aspects.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SignalAspects {
    pub signal_id: i64,
    pub signal_name: String,
    pub aspects: Vec<AspectState>,
}

impl From<&Signal> for SignalAspects {
    fn from(signal: &Signal) -> Self {
        Self {
            signal_id: signal.id,
            signal_name: signal.name.clone(),
            aspects: signal.aspects.iter().map(AspectState::from).collect(),
        }
    }
}
