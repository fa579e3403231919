pub mod file;
pub mod memory;
pub mod traits;

use crate::{
    config::Config,
    error::{Result, VistagenError},
    models::GeneratedImage,
};
use std::sync::Arc;

pub use file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::{ImageStore, RETENTION_DAYS};

/// Owns the configured collection backend and fronts its operations.
pub struct StoreManager {
    backend: Arc<dyn ImageStore>,
}

impl StoreManager {
    pub fn new(config: &Config) -> Result<Self> {
        let backend: Arc<dyn ImageStore> = if config.use_file_store {
            let store_config = config
                .store
                .as_ref()
                .ok_or_else(|| VistagenError::ConfigError("store config required".into()))?;
            let path = store_config
                .path
                .as_ref()
                .ok_or_else(|| VistagenError::ConfigError("store path required".into()))?;
            Arc::new(JsonFileStore::new(path)?)
        } else {
            Arc::new(MemoryStore::new())
        };

        Ok(Self { backend })
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Arc::new(MemoryStore::new()),
        }
    }

    pub fn store(&self) -> &Arc<dyn ImageStore> {
        &self.backend
    }

    pub async fn append(&self, records: Vec<GeneratedImage>) -> Result<usize> {
        self.backend.append(records).await
    }

    pub async fn history(&self) -> Result<Vec<GeneratedImage>> {
        self.backend.history().await
    }

    pub async fn gallery(&self) -> Result<Vec<GeneratedImage>> {
        self.backend.gallery().await
    }

    pub async fn ranking(&self) -> Result<Vec<GeneratedImage>> {
        self.backend.ranking().await
    }

    pub async fn promote(&self, id: &str) -> Result<bool> {
        self.backend.promote(id).await
    }

    pub async fn vote(&self, id: &str, delta: i32) -> Result<i32> {
        self.backend.vote(id, delta).await
    }

    pub async fn remove(&self, id: &str) -> Result<bool> {
        self.backend.remove(id).await
    }

    pub async fn clear(&self) -> Result<()> {
        self.backend.clear().await
    }
}
