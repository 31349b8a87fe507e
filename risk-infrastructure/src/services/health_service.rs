use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use risk_domain::ports::{HealthCheckService, RegistryRepository};
use risk_domain::RuntimeConfig;

/// Ready when the configured registry file is absent or parses cleanly.
pub struct RegistryHealthService {
    registry_repo: Arc<dyn RegistryRepository>,
    config: RuntimeConfig,
}

impl RegistryHealthService {
    pub fn new(registry_repo: Arc<dyn RegistryRepository>, config: RuntimeConfig) -> Self {
        Self {
            registry_repo,
            config,
        }
    }
}

#[async_trait]
impl HealthCheckService for RegistryHealthService {
    async fn check_registries(&self) -> anyhow::Result<bool> {
        if !Path::new(&self.config.registry_path).exists() {
            return Ok(true);
        }
        self.registry_repo
            .load_registries(&self.config.registry_path)
            .await
            .map(|_| true)
    }
}
