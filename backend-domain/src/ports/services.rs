use async_trait::async_trait;

use crate::entities::Address;

#[async_trait]
pub trait PostalLookup: Send + Sync {
    /// Resolves a CEP to a street address. `Ok(None)` means the CEP is
    /// well-formed but unknown to the lookup service.
    async fn lookup(&self, cep: &str) -> anyhow::Result<Option<Address>>;
}

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_store(&self) -> anyhow::Result<bool>;
}
