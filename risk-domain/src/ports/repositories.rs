use async_trait::async_trait;

use crate::entities::Registries;

#[async_trait]
pub trait RegistryRepository: Send + Sync {
    async fn load_registries(&self, path: &str) -> anyhow::Result<Registries>;
    async fn save_registries(&self, path: &str, registries: &Registries) -> anyhow::Result<()>;
}
