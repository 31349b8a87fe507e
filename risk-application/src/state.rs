use std::sync::Arc;

use risk_domain::ports::{HealthCheckService, RegistryRepository};
use risk_domain::{Registries, RiskScorer, RuntimeConfig};
use tokio::sync::RwLock;

use crate::Metrics;

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub scorer: RiskScorer,
    pub registry_repo: Arc<dyn RegistryRepository>,
    pub health_service: Arc<dyn HealthCheckService>,
    pub registries: Arc<RwLock<Arc<Registries>>>,
    pub metrics: Arc<Metrics>,
}

impl AppState {
    pub fn new(
        config: RuntimeConfig,
        registry_repo: Arc<dyn RegistryRepository>,
        health_service: Arc<dyn HealthCheckService>,
        registries: Registries,
    ) -> Self {
        Self {
            scorer: RiskScorer::new(config.business_hours),
            config,
            registry_repo,
            health_service,
            registries: Arc::new(RwLock::new(Arc::new(registries))),
            metrics: Arc::new(Metrics::default()),
        }
    }

    /// Registries in force right now. The lock is released before scoring starts.
    pub async fn registries_snapshot(&self) -> Arc<Registries> {
        self.registries.read().await.clone()
    }
}
