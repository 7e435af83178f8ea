use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use backend_application::scan::ScanSessions;
use backend_application::{AppState, Metrics};
use backend_infrastructure::{AppConfig, RestStore, ViaCepClient};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    pub async fn new() -> Result<Self> {
        let config = AppConfig::load().await?;
        let runtime_config = config.to_runtime_config();
        let store_config = config.to_store_config();

        let store = Arc::new(RestStore::new(
            &store_config,
            Duration::from_secs(runtime_config.store_timeout_seconds),
        )?);
        let postal = Arc::new(ViaCepClient::new(
            &runtime_config.postal_base_url,
            Duration::from_secs(runtime_config.request_timeout_seconds.max(3)),
        )?);

        let state = AppState {
            config: runtime_config,
            event_repo: store.clone(),
            speaker_repo: store.clone(),
            registration_repo: store.clone(),
            scan_log_repo: store,
            postal,
            scan_sessions: Arc::new(ScanSessions::default()),
            metrics: Arc::new(Metrics::default()),
        };

        Ok(Self { state })
    }
}
