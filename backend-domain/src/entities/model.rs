// Runtime configuration handed to the application layer

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub postal_base_url: String,
    pub scan_cooldown_ms: u64,
    pub scan_log_enabled: bool,
    pub store_timeout_seconds: u64,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub store_url: String,
    pub store_api_key: Option<String>,
}
