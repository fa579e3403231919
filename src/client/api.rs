use crate::{
    error::Result,
    models::{ImageApiRequest, ImageApiResponse},
};
use async_trait::async_trait;

/// The external image generation API as the orchestrator sees it: one
/// request per variant, each classified success or failure independently.
#[async_trait]
pub trait ImageApi: Send + Sync {
    async fn generate(&self, request: ImageApiRequest) -> Result<ImageApiResponse>;
}
