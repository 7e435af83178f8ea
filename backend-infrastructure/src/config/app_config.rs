use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{RuntimeConfig, StoreConfig};

use super::validation::validate_http_url;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub store_url: String,
    pub store_api_key: Option<String>,
    pub postal_base_url: String,
    pub scan_cooldown_ms: u64,
    pub scan_log_enabled: bool,
    pub store_timeout_seconds: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3240".to_string(),
            api_token: None,
            store_url: "http://127.0.0.1:54321".to_string(),
            store_api_key: None,
            postal_base_url: "https://viacep.com.br/ws".to_string(),
            scan_cooldown_ms: 2000,
            scan_log_enabled: true,
            store_timeout_seconds: 5,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 15,
        }
    }
}

impl AppConfig {
    pub async fn load() -> Result<Self> {
        let path = env::var("PALCO_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let file_path = Path::new(&path);
        if !file_path.exists() {
            warn!("config.toml not found, using defaults");
            let mut config = AppConfig::default();
            config.apply_env_overrides();
            config.normalize();
            config.validate()?;
            return Ok(config);
        }
        let content = fs::read_to_string(file_path).await?;
        let mut config: AppConfig = toml::from_str(&content)?;
        config.apply_env_overrides();
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn normalize(&mut self) {
        if let Some(api_token) = &self.api_token {
            if api_token.trim().is_empty() {
                self.api_token = None;
            }
        }
        if let Some(key) = &self.store_api_key {
            if key.trim().is_empty() {
                self.store_api_key = None;
            }
        }
        self.store_url = self.store_url.trim().trim_end_matches('/').to_string();
        self.postal_base_url = self
            .postal_base_url
            .trim()
            .trim_end_matches('/')
            .to_string();
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        validate_http_url("store_url", &self.store_url)?;
        validate_http_url("postal_base_url", &self.postal_base_url)?;
        if self.store_timeout_seconds == 0 {
            return Err(anyhow!("store_timeout_seconds must be greater than 0"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            postal_base_url: self.postal_base_url.clone(),
            scan_cooldown_ms: self.scan_cooldown_ms,
            scan_log_enabled: self.scan_log_enabled,
            store_timeout_seconds: self.store_timeout_seconds,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
        }
    }

    pub fn to_store_config(&self) -> StoreConfig {
        StoreConfig {
            store_url: self.store_url.clone(),
            store_api_key: self.store_api_key.clone(),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("PALCO_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Ok(value) = env::var("PALCO_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Ok(value) = env::var("PALCO_STORE_URL") {
            self.store_url = value;
        }
        if let Ok(value) = env::var("PALCO_STORE_API_KEY") {
            self.store_api_key = Some(value);
        }
        if let Ok(value) = env::var("PALCO_POSTAL_BASE_URL") {
            self.postal_base_url = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes_and_blank_secrets() {
        let mut config = AppConfig {
            store_url: "https://abc.supabase.co/".to_string(),
            postal_base_url: "https://viacep.com.br/ws/".to_string(),
            api_token: Some("   ".to_string()),
            store_api_key: Some(String::new()),
            ..AppConfig::default()
        };
        config.normalize();
        assert_eq!(config.store_url, "https://abc.supabase.co");
        assert_eq!(config.postal_base_url, "https://viacep.com.br/ws");
        assert!(config.api_token.is_none());
        assert!(config.store_api_key.is_none());
    }

    #[test]
    fn validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.bind_addr = "nonsense".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.store_url = "ftp://example".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.store_timeout_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn defaults_pass_validation() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
