use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Aspect;

/// A piece of signalling equipment, identified by a caller-assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Signal {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub aspects: Vec<Aspect>,
}

impl Signal {
    /// Whether the mutual-exclusivity invariant holds for this signal's aspects.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.aspects
            .iter()
            .all(|a| self.aspects.iter().all(|b| !a.conflicts_with(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::AspectType;

    fn aspect(id: i64, aspect_type: AspectType, is_on: bool) -> Aspect {
        Aspect {
            id,
            aspect_type,
            is_on,
            signal_id: 1,
        }
    }

    #[test]
    fn consistent_when_only_one_side_on() {
        let signal = Signal {
            id: 1,
            name: "S1".into(),
            aspects: vec![
                aspect(1, AspectType::Permissive, true),
                aspect(2, AspectType::Restrictive, false),
                aspect(3, AspectType::Override, true),
            ],
        };
        assert!(signal.is_consistent());
    }

    #[test]
    fn inconsistent_when_opposites_both_on() {
        let signal = Signal {
            id: 1,
            name: "S1".into(),
            aspects: vec![
                aspect(1, AspectType::Permissive, true),
                aspect(2, AspectType::Restrictive, true),
            ],
        };
        assert!(!signal.is_consistent());
    }

    #[test]
    fn aspects_on_different_signals_never_conflict() {
        let a = aspect(1, AspectType::Permissive, true);
        let b = Aspect {
            signal_id: 2,
            ..aspect(2, AspectType::Restrictive, true)
        };
        assert!(!a.conflicts_with(&b));
    }
}
