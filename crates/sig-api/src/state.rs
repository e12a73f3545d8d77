use std::sync::Arc;

use sig_config::GeneralConfig;
use sig_db::service::SignalService;

/// Shared handler state: the injected storage service and paging limits.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<SignalService>,
    pub general: GeneralConfig,
}

impl AppState {
    #[must_use]
    pub fn new(service: SignalService, general: GeneralConfig) -> Self {
        Self {
            service: Arc::new(service),
            general,
        }
    }
}
