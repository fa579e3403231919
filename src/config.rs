use std::env;

/// Connection settings for the external image generation API.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub endpoint: Option<String>,
    pub api_key: Option<String>,
    pub model: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            endpoint: None,
            api_key: None,
            model: None,
        }
    }
}

impl ApiConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let endpoint = env::var("VISTAGEN_API_URL").ok();
        let api_key = env::var("VISTAGEN_API_KEY").ok();
        let model = env::var("VISTAGEN_MODEL").ok();

        ApiConfig {
            endpoint,
            api_key,
            model,
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }
}

/// Settings for the persisted image collection.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub path: Option<String>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig { path: None }
    }
}

impl StoreConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let path = env::var("VISTAGEN_STORE_PATH").ok();
        StoreConfig { path }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub use_file_store: bool,
    pub api: Option<ApiConfig>,
    pub store: Option<StoreConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            use_file_store: false,
            api: None,
            store: None,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        let store = StoreConfig::from_env();
        let use_file_store = store.path.is_some();

        Config {
            use_file_store,
            api: Some(ApiConfig::from_env()),
            store: Some(store),
        }
    }

    pub fn with_api(mut self, config: ApiConfig) -> Self {
        self.api = Some(config);
        self
    }

    pub fn with_file_store(mut self, config: StoreConfig) -> Self {
        self.store = Some(config);
        self.use_file_store = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_compose() {
        let config = Config::new()
            .with_api(
                ApiConfig::new()
                    .with_endpoint("http://localhost:9090/generate")
                    .with_api_key("secret")
                    .with_model("scene-diffusion-v2"),
            )
            .with_file_store(StoreConfig::new().with_path("images.json"));

        assert!(config.use_file_store);
        let api = config.api.expect("api config");
        assert_eq!(api.endpoint.as_deref(), Some("http://localhost:9090/generate"));
        assert_eq!(api.model.as_deref(), Some("scene-diffusion-v2"));
        assert_eq!(
            config.store.expect("store config").path.as_deref(),
            Some("images.json")
        );
    }

    #[test]
    fn test_default_config_uses_memory_store() {
        let config = Config::new();
        assert!(!config.use_file_store);
        assert!(config.store.is_none());
    }
}
