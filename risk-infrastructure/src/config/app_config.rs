use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use risk_domain::RuntimeConfig;

use super::validation::{validate_bind_addr, validate_business_hours};

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub registry_path: String,
    pub business_hours_start: u32,
    pub business_hours_end: u32,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub max_batch_size: usize,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8088".to_string(),
            api_token: None,
            registry_path: "./registries.yaml".to_string(),
            business_hours_start: 6,
            business_hours_end: 22,
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 15,
            max_batch_size: 1000,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Reads the file named by `RISK_CONFIG` (default `./config.toml`).
    pub async fn load() -> Result<Self> {
        let path = env::var("RISK_CONFIG").unwrap_or_else(|_| "./config.toml".to_string());
        let mut config = Self::read_file(Path::new(&path)).await?;
        config.apply_env_overrides();
        config.finish(Path::new(&path).parent())?;
        Ok(config)
    }

    /// Same as `load` but for an explicit path and without consulting the environment.
    pub async fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::read_file(path).await?;
        config.finish(path.parent())?;
        Ok(config)
    }

    async fn read_file(file_path: &Path) -> Result<Self> {
        if !file_path.exists() {
            warn!("{} not found, using defaults", file_path.display());
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(file_path).await?;
        let config: AppConfig = toml::from_str(&content)
            .map_err(|err| anyhow!("failed to parse {}: {}", file_path.display(), err))?;
        Ok(config)
    }

    fn finish(&mut self, base_dir: Option<&Path>) -> Result<()> {
        self.resolve_paths(base_dir);
        self.normalize();
        self.validate()
    }

    pub fn normalize(&mut self) {
        self.bind_addr = self.bind_addr.trim().to_string();
        self.api_token = non_blank(self.api_token.take());
        self.log_dir = non_blank(self.log_dir.take());
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.registry_path = resolve_path(base, &self.registry_path);
        self.log_dir = self.log_dir.take().map(|dir| resolve_path(base, &dir));
    }

    pub fn validate(&self) -> Result<()> {
        validate_bind_addr(&self.bind_addr)?;
        validate_business_hours(self.business_hours_start, self.business_hours_end)?;
        if self.registry_path.trim().is_empty() {
            return Err(anyhow!("registry_path must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.max_batch_size == 0 {
            return Err(anyhow!("max_batch_size must be greater than 0"));
        }
        if self.request_timeout_seconds == 0 {
            return Err(anyhow!("request_timeout_seconds must be greater than 0"));
        }
        Ok(())
    }

    pub fn to_runtime_config(&self) -> Result<RuntimeConfig> {
        Ok(RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            registry_path: self.registry_path.clone(),
            business_hours: validate_business_hours(
                self.business_hours_start,
                self.business_hours_end,
            )?,
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            max_batch_size: self.max_batch_size,
            log_dir: self.log_dir.clone(),
        })
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    /// Applies `RISK_*` overrides from `lookup`. Unparsable numbers keep the current value.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("RISK_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("RISK_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Some(value) = lookup("RISK_REGISTRY_PATH") {
            self.registry_path = value;
        }
        if let Some(value) = lookup("RISK_BUSINESS_HOURS_START") {
            self.business_hours_start = value.parse().unwrap_or(self.business_hours_start);
        }
        if let Some(value) = lookup("RISK_BUSINESS_HOURS_END") {
            self.business_hours_end = value.parse().unwrap_or(self.business_hours_end);
        }
        if let Some(value) = lookup("RISK_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("RISK_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("RISK_MAX_BATCH_SIZE") {
            self.max_batch_size = value.parse().unwrap_or(self.max_batch_size);
        }
        if let Some(value) = lookup("RISK_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn overrides_replace_values_and_ignore_garbage() {
        let vars: HashMap<&str, &str> = [
            ("RISK_BIND_ADDR", "0.0.0.0:9000"),
            ("RISK_BUSINESS_HOURS_START", "8"),
            ("RISK_MAX_BATCH_SIZE", "many"),
            ("RISK_API_TOKEN", "   "),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|key| vars.get(key).map(|value| value.to_string()));
        config.normalize();

        assert_eq!(config.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.business_hours_start, 8);
        assert_eq!(config.max_batch_size, 1000);
        assert_eq!(config.api_token, None);
    }

    #[test]
    fn relative_paths_follow_the_config_directory() {
        let mut config = AppConfig {
            log_dir: Some("logs".to_string()),
            ..AppConfig::default()
        };
        config.resolve_paths(Some(Path::new("/etc/risk")));
        assert_eq!(config.registry_path, "/etc/risk/./registries.yaml");
        assert_eq!(config.log_dir.as_deref(), Some("/etc/risk/logs"));

        let mut absolute = AppConfig {
            registry_path: "/var/lib/risk/registries.json".to_string(),
            ..AppConfig::default()
        };
        absolute.resolve_paths(Some(Path::new("/etc/risk")));
        assert_eq!(absolute.registry_path, "/var/lib/risk/registries.json");
    }

    #[test]
    fn validate_rejects_zero_limits() {
        let config = AppConfig {
            max_batch_size: 0,
            ..AppConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(AppConfig::default().validate().is_ok());

        let no_timeout = AppConfig {
            request_timeout_seconds: 0,
            ..AppConfig::default()
        };
        let err = no_timeout.validate().expect_err("zero timeout");
        assert!(err.to_string().contains("request_timeout_seconds"));
    }
}
