//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default page size for list operations.
const fn default_limit() -> u32 {
    100
}

/// Upper bound on a single page.
const fn default_max_limit() -> u32 {
    1000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Page size used when a list request does not specify one.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Requested page sizes above this are clamped.
    #[serde(default = "default_max_limit")]
    pub max_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
        }
    }
}

impl GeneralConfig {
    /// Resolve a requested page size against the configured default and cap.
    pub fn effective_limit(&self, requested: Option<u32>) -> u32 {
        requested.unwrap_or(self.default_limit).min(self.max_limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_limit, 100);
        assert_eq!(config.max_limit, 1000);
    }

    #[test]
    fn effective_limit_defaults_and_clamps() {
        let config = GeneralConfig::default();
        assert_eq!(config.effective_limit(None), 100);
        assert_eq!(config.effective_limit(Some(5)), 5);
        assert_eq!(config.effective_limit(Some(50_000)), 1000);
    }
}
