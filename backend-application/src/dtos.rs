// Wire DTOs for the scan endpoints

use serde::{Deserialize, Serialize};

use backend_domain::{Event, ScanFailure};

#[derive(Debug, Clone, Deserialize)]
pub struct ScanRequest {
    pub session_id: String,
    pub payload: String,
    #[serde(default)]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScanReply {
    Found {
        evento: Event,
    },
    Failed {
        reason: ScanFailure,
        message: String,
    },
    /// The session lock was held; this frame was dropped without touching
    /// the store.
    Discarded,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AcknowledgeRequest {
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcknowledgeReply {
    pub released: bool,
}
