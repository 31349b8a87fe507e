use std::path::Path;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::fs;
use tracing::{info, warn};

use risk_domain::{Registries, RegistryRepository};

/// Registries stored as a single YAML document, or JSON when the path ends in `.json`.
pub struct RegistryFileRepository;

impl RegistryFileRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RegistryFileRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[async_trait]
impl RegistryRepository for RegistryFileRepository {
    async fn load_registries(&self, path: &str) -> anyhow::Result<Registries> {
        let file_path = Path::new(path);
        if !file_path.exists() {
            warn!("registry file {} not found, starting with empty registries", path);
            return Ok(Registries::default());
        }
        let content = fs::read_to_string(file_path).await?;
        if content.trim().is_empty() {
            return Ok(Registries::default());
        }
        let registries: Registries = if is_json(file_path) {
            serde_json::from_str(&content).map_err(|err| anyhow!("{}: {}", path, err))?
        } else {
            serde_yaml::from_str(&content).map_err(|err| anyhow!("{}: {}", path, err))?
        };
        info!(
            "loaded registries from {}: {} merchants, {} locations",
            path,
            registries.merchants.len(),
            registries.locations.len()
        );
        Ok(registries)
    }

    async fn save_registries(&self, path: &str, registries: &Registries) -> anyhow::Result<()> {
        let file_path = Path::new(path);
        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }
        let content = if is_json(file_path) {
            serde_json::to_string_pretty(registries)?
        } else {
            serde_yaml::to_string(registries)?
        };
        fs::write(file_path, content).await?;
        Ok(())
    }
}
