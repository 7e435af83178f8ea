// ViaCEP postal lookup client

use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use backend_domain::ports::PostalLookup;
use backend_domain::Address;

#[derive(Clone)]
pub struct ViaCepClient {
    client: Client,
    base_url: String,
}

/// ViaCEP answers unknown CEPs with `{"erro": true}` and HTTP 200.
#[derive(Debug, Deserialize)]
struct ViaCepBody {
    #[serde(default)]
    erro: bool,
    #[serde(default)]
    cep: String,
    #[serde(default)]
    logradouro: String,
    #[serde(default)]
    complemento: String,
    #[serde(default)]
    bairro: String,
    #[serde(default)]
    localidade: String,
    #[serde(default)]
    uf: String,
}

impl ViaCepClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl PostalLookup for ViaCepClient {
    async fn lookup(&self, cep: &str) -> Result<Option<Address>> {
        let url = format!("{}/{}/json/", self.base_url, cep);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(anyhow!("postal lookup responded {}", response.status()));
        }
        let body: ViaCepBody = response.json().await?;
        if body.erro {
            return Ok(None);
        }
        Ok(Some(Address {
            cep: body.cep,
            logradouro: body.logradouro,
            complemento: body.complemento,
            bairro: body.bairro,
            localidade: body.localidade,
            uf: body.uf,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::routing::get;
    use axum::Router;

    async fn spawn_viacep() -> String {
        let router = Router::new()
            .route(
                "/01310100/json/",
                get(|| async {
                    axum::Json(serde_json::json!({
                        "cep": "01310-100",
                        "logradouro": "Avenida Paulista",
                        "complemento": "até 610 - lado par",
                        "bairro": "Bela Vista",
                        "localidade": "São Paulo",
                        "uf": "SP"
                    }))
                }),
            )
            .route(
                "/99999999/json/",
                get(|| async { axum::Json(serde_json::json!({ "erro": true })) }),
            );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind");
        let addr = listener.local_addr().expect("addr");
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("serve");
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn resolves_known_cep() {
        let base = spawn_viacep().await;
        let client = ViaCepClient::new(&base, Duration::from_secs(2)).expect("client");

        let endereco = client
            .lookup("01310100")
            .await
            .expect("lookup")
            .expect("address");
        assert_eq!(endereco.localidade, "São Paulo");
        assert_eq!(
            endereco.as_local(),
            "Avenida Paulista, Bela Vista, São Paulo - SP"
        );
    }

    #[tokio::test]
    async fn unknown_cep_is_none() {
        let base = spawn_viacep().await;
        let client = ViaCepClient::new(&base, Duration::from_secs(2)).expect("client");

        let endereco = client.lookup("99999999").await.expect("lookup");
        assert!(endereco.is_none());
    }
}
