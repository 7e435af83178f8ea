// Registration entity (`inscricoes` table)

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registration {
    pub id: i64,
    pub nome_completo: String,
    pub cpf: String,
    pub email: String,
    pub telefone: String,
    pub evento_id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationDraft {
    pub nome_completo: String,
    pub cpf: String,
    pub email: String,
    pub telefone: String,
    pub evento_id: i64,
}
