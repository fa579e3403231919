use std::fmt;

#[derive(Debug)]
pub enum VistagenError {
    ConfigError(String),
    ValidationError(String),
    RequestError(String),
    ResponseError(String),
    SerializationError(String),
    StoreError(String),
    BatchFailed(String),
}

impl fmt::Display for VistagenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VistagenError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            VistagenError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            VistagenError::RequestError(msg) => write!(f, "Request error: {}", msg),
            VistagenError::ResponseError(msg) => write!(f, "Response error: {}", msg),
            VistagenError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
            VistagenError::StoreError(msg) => write!(f, "Store error: {}", msg),
            VistagenError::BatchFailed(msg) => write!(f, "Batch failed: {}", msg),
        }
    }
}

impl std::error::Error for VistagenError {}

pub type Result<T> = std::result::Result<T, VistagenError>;
