// Speaker entity (`palestrantes` table)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Speaker {
    pub id: i64,
    pub nome: String,
    pub especialidade: String,
    pub email: String,
    pub biografia: String,
    pub telefone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeakerDraft {
    pub nome: String,
    pub especialidade: String,
    pub email: String,
    pub biografia: String,
    pub telefone: String,
}
