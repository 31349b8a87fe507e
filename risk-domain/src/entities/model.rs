use serde::{Deserialize, Serialize};

use crate::value_objects::BusinessHours;

/// Validated settings the application layer runs with.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub registry_path: String,
    pub business_hours: BusinessHours,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub max_batch_size: usize,
    pub log_dir: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8088".to_string(),
            api_token: None,
            registry_path: "./registries.yaml".to_string(),
            business_hours: BusinessHours::default(),
            max_body_bytes: 8 * 1024 * 1024,
            request_timeout_seconds: 15,
            max_batch_size: 1000,
            log_dir: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistryQuery {
    pub query: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistryUpdateQuery {
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistryPayload {
    #[serde(default)]
    pub known: Vec<String>,
    #[serde(default)]
    pub high_risk: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEntry {
    pub name: String,
    pub reputation: crate::entities::Reputation,
}
