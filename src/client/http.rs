use crate::{
    client::api::ImageApi,
    config::ApiConfig,
    error::{Result, VistagenError},
    models::{ImageApiRequest, ImageApiResponse},
};
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use reqwest::Client;
use serde_json::json;

/// HTTP implementation of [`ImageApi`]. Posts a JSON payload to a configured
/// endpoint and accepts either a raw image body or a JSON object carrying
/// encoded images.
pub struct HttpImageApi {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
    model: Option<String>,
}

impl HttpImageApi {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let endpoint = config
            .endpoint
            .ok_or_else(|| VistagenError::ConfigError("image API endpoint is required".into()))?;

        Ok(Self {
            client: Client::new(),
            endpoint,
            api_key: config.api_key,
            model: config.model,
        })
    }

    fn build_headers(&self) -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(api_key) = &self.api_key {
            if let Ok(value) = format!("Bearer {}", api_key).parse() {
                headers.insert(reqwest::header::AUTHORIZATION, value);
            }
        }
        headers
    }

    /// Base64 payloads get wrapped into self-contained data URLs; remote
    /// URLs and already-wrapped data URLs pass through untouched.
    fn normalize_entry(entry: String) -> String {
        if entry.starts_with("http://")
            || entry.starts_with("https://")
            || entry.starts_with("data:")
        {
            entry
        } else {
            format!("data:image/png;base64,{}", entry)
        }
    }
}

#[async_trait]
impl ImageApi for HttpImageApi {
    async fn generate(&self, request: ImageApiRequest) -> Result<ImageApiResponse> {
        let mut payload = json!({
            "prompt": request.prompt,
            "seed": request.seed,
            "width": request.width,
            "height": request.height,
            "output_format": request.output_format,
        });
        if let Some(model) = &self.model {
            payload["model"] = json!(model);
        }

        log::debug!("Requesting image from {} (seed {})", self.endpoint, request.seed);

        let response = self
            .client
            .post(&self.endpoint)
            .headers(self.build_headers())
            .json(&payload)
            .send()
            .await
            .map_err(|e| VistagenError::RequestError(format!("image request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(VistagenError::RequestError(format!(
                "image API returned {}: {}",
                status, error_text
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/json")
            .to_string();

        if content_type.starts_with("image/") {
            let bytes = response
                .bytes()
                .await
                .map_err(|e| VistagenError::ResponseError(e.to_string()))?;
            let url = format!("data:{};base64,{}", content_type, BASE64.encode(&bytes));
            return Ok(ImageApiResponse { images: vec![url] });
        }

        let parsed: ImageApiResponse = response
            .json()
            .await
            .map_err(|e| VistagenError::ResponseError(e.to_string()))?;

        if parsed.images.is_empty() {
            return Err(VistagenError::ResponseError(
                "no images in API response".into(),
            ));
        }

        Ok(ImageApiResponse {
            images: parsed.images.into_iter().map(Self::normalize_entry).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_endpoint() {
        let result = HttpImageApi::new(ApiConfig::new());
        assert!(matches!(result, Err(VistagenError::ConfigError(_))));
    }

    #[test]
    fn test_normalize_entry_wraps_bare_base64() {
        assert_eq!(
            HttpImageApi::normalize_entry("AAAA".into()),
            "data:image/png;base64,AAAA"
        );
    }

    #[test]
    fn test_normalize_entry_passes_urls_through() {
        assert_eq!(
            HttpImageApi::normalize_entry("https://cdn.example/img.png".into()),
            "https://cdn.example/img.png"
        );
        assert_eq!(
            HttpImageApi::normalize_entry("data:image/jpeg;base64,BBBB".into()),
            "data:image/jpeg;base64,BBBB"
        );
    }
}
