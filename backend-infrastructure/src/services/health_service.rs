use std::sync::Arc;

use async_trait::async_trait;
use backend_domain::ports::HealthCheckService;
use backend_domain::EventRepository;

pub struct DefaultHealthService {
    event_repo: Arc<dyn EventRepository>,
}

impl DefaultHealthService {
    pub fn new(event_repo: Arc<dyn EventRepository>) -> Self {
        Self { event_repo }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    async fn check_store(&self) -> anyhow::Result<bool> {
        self.event_repo.ping().await?;
        Ok(true)
    }
}
