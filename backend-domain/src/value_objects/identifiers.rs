// Identifier value objects

use serde::{Deserialize, Serialize};

/// Identifies one scanner session (one device/operator). The scan lock is
/// owned per session, never process-wide.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub String);
