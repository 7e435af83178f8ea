use anyhow::{anyhow, Result};

pub fn validate_http_url(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} must not be empty", field));
    }
    if !value.starts_with("http://") && !value.starts_with("https://") {
        return Err(anyhow!("{} must be an http(s) url", field));
    }
    Ok(())
}
