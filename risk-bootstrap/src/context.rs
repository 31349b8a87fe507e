use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use risk_application::AppState;
use risk_domain::RegistryRepository;
use risk_infrastructure::{AppConfig, RegistryFileRepository, RegistryHealthService};

pub struct AppContext {
    pub state: AppState,
}

impl AppContext {
    /// Wires the file-backed registry store into a ready `AppState`. A registry
    /// file that exists but cannot be parsed is a startup error.
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let runtime_config = config.to_runtime_config()?;

        let registry_repo = Arc::new(RegistryFileRepository::new());
        let registries = registry_repo
            .load_registries(&runtime_config.registry_path)
            .await?;
        info!(
            "registries ready: {} merchants, {} locations",
            registries.merchants.len(),
            registries.locations.len()
        );

        let health_service = Arc::new(RegistryHealthService::new(
            registry_repo.clone(),
            runtime_config.clone(),
        ));
        let state = AppState::new(runtime_config, registry_repo, health_service, registries);

        Ok(Self { state })
    }
}
