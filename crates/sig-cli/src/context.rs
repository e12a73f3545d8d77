use anyhow::Context;
use sig_config::SignalConfig;
use sig_db::service::SignalService;

use crate::cli::GlobalFlags;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: SignalService,
    pub config: SignalConfig,
}

impl AppContext {
    /// Open the configured database. `--database` forces a local file.
    pub async fn init(config: SignalConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let service = if let Some(path) = flags.database.as_deref() {
            SignalService::new_local(path)
                .await
                .with_context(|| format!("failed to open database '{path}'"))?
        } else if config.database.is_remote() {
            SignalService::new_remote(&config.database.url, &config.database.auth_token)
                .await
                .with_context(|| {
                    format!("failed to connect to remote database '{}'", config.database.url)
                })?
        } else {
            SignalService::new_local(&config.database.path)
                .await
                .with_context(|| format!("failed to open database '{}'", config.database.path))?
        };

        tracing::debug!("database ready");
        Ok(Self { service, config })
    }
}
