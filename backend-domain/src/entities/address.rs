// Address entity, shaped after the ViaCEP response body

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Address {
    pub cep: String,
    pub logradouro: String,
    #[serde(default)]
    pub complemento: String,
    pub bairro: String,
    pub localidade: String,
    pub uf: String,
}

impl Address {
    /// One-line rendering used to prefill an event's `local` field,
    /// "logradouro, bairro, localidade - uf".
    pub fn as_local(&self) -> String {
        format!(
            "{}, {}, {} - {}",
            self.logradouro, self.bairro, self.localidade, self.uf
        )
    }
}
