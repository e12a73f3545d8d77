use sig_config::GeneralConfig;

/// Compute `(offset, limit)` for a listing: local args, then configured defaults.
#[must_use]
pub fn page(skip: Option<u32>, limit: Option<u32>, general: &GeneralConfig) -> (u32, u32) {
    (skip.unwrap_or(0), general.effective_limit(limit))
}
