// Scan log entry (`scan_logs` table)
// Immutable audit record, one per scan attempt

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stored copy of the raw payload is capped at this many characters.
pub const MAX_LOGGED_PAYLOAD: usize = 255;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanLogEntry {
    pub id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub action: String,
    pub payload: String,
    pub format: String,
    pub outcome: String,
    pub scanned_at: DateTime<Utc>,
}

impl ScanLogEntry {
    pub fn qr_scan(
        user_id: Option<String>,
        payload: &str,
        format: &str,
        outcome: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            action: "qr_scan".to_string(),
            payload: payload.chars().take(MAX_LOGGED_PAYLOAD).collect(),
            format: format.to_string(),
            outcome: outcome.to_string(),
            scanned_at: Utc::now(),
        }
    }
}
