// Dashboard aggregates

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub eventos: usize,
    pub palestrantes: usize,
    pub inscricoes: usize,
    /// Events per calendar month, index 0 = January.
    pub eventos_por_mes: Vec<u32>,
    pub inscricoes_por_evento: Vec<EventoInscricoes>,
    pub palestrantes_por_especialidade: Vec<EspecialidadeContagem>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventoInscricoes {
    pub evento_id: i64,
    pub nome: String,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EspecialidadeContagem {
    pub especialidade: String,
    pub total: usize,
}
