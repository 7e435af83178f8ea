use std::sync::Arc;

use backend_domain::ports::{
    EventRepository, PostalLookup, RegistrationRepository, ScanLogRepository, SpeakerRepository,
};
use backend_domain::RuntimeConfig;

use crate::scan::ScanSessions;
use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub event_repo: Arc<dyn EventRepository>,
    pub speaker_repo: Arc<dyn SpeakerRepository>,
    pub registration_repo: Arc<dyn RegistrationRepository>,
    pub scan_log_repo: Arc<dyn ScanLogRepository>,
    pub postal: Arc<dyn PostalLookup>,
    pub scan_sessions: Arc<ScanSessions>,
    pub metrics: Arc<Metrics>,
}
