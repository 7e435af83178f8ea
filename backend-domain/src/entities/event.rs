// Event entity
// Column names match the hosted store's `eventos` table

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    /// Day/month/year textual form, e.g. "25/12/2026".
    pub data: String,
    pub local: String,
    pub organizador: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagem_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Insert/update payload. The id never travels in the body; it only appears
/// in the row filter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDraft {
    pub nome: String,
    pub descricao: String,
    pub data: String,
    pub local: String,
    pub organizador: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub imagem_url: Option<String>,
}
