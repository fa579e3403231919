use crate::{
    client::api::ImageApi,
    error::{Result, VistagenError},
    models::{BatchRequest, BatchResult, GeneratedImage, ImageApiRequest},
};
use futures::future::join_all;
use rand::Rng;
use std::sync::Arc;

/// Fans one batch out into independent per-variant requests, waits for every
/// one to settle, and folds the outcomes into a [`BatchResult`]. A single
/// failed variant never aborts the batch; only a batch with zero successes
/// is an error.
pub struct Orchestrator {
    api: Arc<dyn ImageApi>,
}

impl Orchestrator {
    pub fn new(api: Arc<dyn ImageApi>) -> Self {
        Self { api }
    }

    pub async fn generate_batch(&self, request: &BatchRequest) -> Result<BatchResult> {
        request.validate()?;

        let full_prompt = request.composed_prompt();
        let (width, height) = request.aspect_ratio.dimensions();
        let requested = request.variant_count;

        log::info!(
            "Generating {} variant(s) for prompt: \"{}\"",
            requested,
            full_prompt
        );

        // Seeds are drawn up front so identical prompts still diverge.
        let seeds: Vec<u32> = {
            let mut rng = rand::thread_rng();
            (0..requested).map(|_| rng.gen()).collect()
        };

        let calls = seeds.into_iter().map(|seed| {
            let api = Arc::clone(&self.api);
            let api_request = ImageApiRequest {
                prompt: full_prompt.clone(),
                seed,
                width,
                height,
                output_format: "png".to_string(),
            };
            async move { api.generate(api_request).await }
        });

        // All variants settle before any outcome is classified; a slow
        // request only delays the aggregate return, never its siblings.
        let settled = join_all(calls).await;

        let mut images = Vec::new();
        for (index, outcome) in settled.into_iter().enumerate() {
            match outcome {
                Ok(response) => match response.images.into_iter().next() {
                    Some(url) => images.push(GeneratedImage::new(
                        url,
                        request.original_prompt.clone(),
                        request.prompt.clone(),
                        request.style,
                        request.aspect_ratio,
                    )),
                    None => log::warn!("Variant {} returned no image data", index),
                },
                Err(e) => log::warn!("Variant {} failed: {}", index, e),
            }
        }

        if images.is_empty() {
            return Err(VistagenError::BatchFailed(format!(
                "all {} variant(s) failed",
                requested
            )));
        }

        let succeeded = images.len() as u32;
        if succeeded < requested {
            log::warn!("Generated {} of {} requested variant(s)", succeeded, requested);
        } else {
            log::info!("Generated all {} variant(s)", requested);
        }

        Ok(BatchResult {
            images,
            requested,
            succeeded,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AspectRatio, ImageApiResponse, VisualStyle};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// Scriptable stand-in for the external API: the first `fail_first`
    /// calls error, the rest succeed; every received prompt is recorded.
    struct ScriptedApi {
        calls: AtomicUsize,
        fail_first: usize,
        prompts: Mutex<Vec<String>>,
    }

    impl ScriptedApi {
        fn succeeding() -> Self {
            Self::failing_first(0)
        }

        fn failing_first(fail_first: usize) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_first,
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageApi for ScriptedApi {
        async fn generate(&self, request: ImageApiRequest) -> Result<ImageApiResponse> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(request.prompt.clone());
            if call < self.fail_first {
                Err(VistagenError::RequestError("scripted failure".into()))
            } else {
                Ok(ImageApiResponse {
                    images: vec![format!("data:image/png;base64,seed{}", request.seed)],
                })
            }
        }
    }

    fn batch_request(prompt: &str, variants: u32) -> BatchRequest {
        BatchRequest::new(
            prompt,
            "a robot in a garden",
            VisualStyle::Anime,
            variants,
            AspectRatio::Horizontal,
        )
    }

    #[tokio::test]
    async fn test_all_variants_succeed() {
        let api = Arc::new(ScriptedApi::succeeding());
        let orchestrator = Orchestrator::new(api.clone());
        let start = Utc::now().timestamp_millis();

        let result = orchestrator
            .generate_batch(&batch_request("enhanced robot prompt", 3))
            .await
            .expect("batch should succeed");

        assert_eq!(result.requested, 3);
        assert_eq!(result.succeeded, 3);
        assert_eq!(result.images.len(), 3);
        assert!(!result.is_partial());
        assert_eq!(api.call_count(), 3);

        let ids: HashSet<&str> = result.images.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), 3);

        for image in &result.images {
            assert_eq!(image.enhanced_prompt, "enhanced robot prompt");
            assert_eq!(image.prompt, "a robot in a garden");
            assert_eq!(image.style, VisualStyle::Anime);
            assert_eq!(image.aspect_ratio, AspectRatio::Horizontal);
            assert!(image.timestamp >= start);
        }
    }

    #[tokio::test]
    async fn test_partial_failure_keeps_successes() {
        let api = Arc::new(ScriptedApi::failing_first(1));
        let orchestrator = Orchestrator::new(api.clone());

        let result = orchestrator
            .generate_batch(&batch_request("a castle", 3))
            .await
            .expect("partial batch is not an error");

        assert_eq!(result.requested, 3);
        assert_eq!(result.succeeded, 2);
        assert_eq!(result.images.len(), 2);
        assert!(result.is_partial());
        assert_eq!(api.call_count(), 3);
    }

    #[tokio::test]
    async fn test_all_variants_failing_is_batch_failure() {
        let api = Arc::new(ScriptedApi::failing_first(2));
        let orchestrator = Orchestrator::new(api.clone());

        let result = orchestrator.generate_batch(&batch_request("a castle", 2)).await;

        assert!(matches!(result, Err(VistagenError::BatchFailed(_))));
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_blank_prompt_fails_before_any_request() {
        let api = Arc::new(ScriptedApi::succeeding());
        let orchestrator = Orchestrator::new(api.clone());

        let result = orchestrator.generate_batch(&batch_request("   ", 2)).await;

        assert!(matches!(result, Err(VistagenError::ValidationError(_))));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_variant_count_out_of_range_fails_fast() {
        let api = Arc::new(ScriptedApi::succeeding());
        let orchestrator = Orchestrator::new(api.clone());

        let result = orchestrator.generate_batch(&batch_request("a castle", 9)).await;

        assert!(matches!(result, Err(VistagenError::ValidationError(_))));
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_negative_prompt_reaches_the_wire() {
        let api = Arc::new(ScriptedApi::succeeding());
        let orchestrator = Orchestrator::new(api.clone());

        let request = batch_request("a castle", 1).with_negative_prompt("blur, text");
        orchestrator
            .generate_batch(&request)
            .await
            .expect("batch should succeed");

        let prompts = api.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert_eq!(prompts[0], "a castle. Avoid the following: blur, text");
    }
}
