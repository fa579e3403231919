pub mod api;
pub mod http;
pub mod orchestrator;

use crate::{
    config::ApiConfig,
    error::Result,
    models::{BatchRequest, BatchResult},
};
use std::sync::Arc;

pub use api::ImageApi;
pub use http::HttpImageApi;
pub use orchestrator::Orchestrator;

/// Entry point bundling an [`ImageApi`] backend with the batch orchestrator.
pub struct GenerationClient {
    orchestrator: Orchestrator,
}

impl GenerationClient {
    /// Build a client talking HTTP to the configured endpoint.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let api = HttpImageApi::new(config)?;
        Ok(Self::with_api(Arc::new(api)))
    }

    /// Build a client over any [`ImageApi`] backend.
    pub fn with_api(api: Arc<dyn ImageApi>) -> Self {
        Self {
            orchestrator: Orchestrator::new(api),
        }
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    pub async fn generate_batch(&self, request: &BatchRequest) -> Result<BatchResult> {
        self.orchestrator.generate_batch(request).await
    }
}
