//! Vistagen turns scene descriptions into batches of generated images.
//!
//! The pipeline: a raw prompt is wrapped in a style-specific template
//! ([`prompt::optimize`]), the user approves either wording
//! ([`flow::GenerationFlow`]), and the orchestrator fans the approved
//! prompt out into concurrent per-variant requests against an image API,
//! tolerating partial failure ([`client::Orchestrator`]). Successful
//! variants land in a local collection with history, gallery and ranking
//! views ([`store::StoreManager`]).

pub mod client;
pub mod config;
pub mod error;
pub mod flow;
pub mod logger;
pub mod models;
pub mod prompt;
pub mod store;

pub use client::{GenerationClient, HttpImageApi, ImageApi, Orchestrator};
pub use config::{ApiConfig, Config, StoreConfig};
pub use error::{Result, VistagenError};
pub use flow::{FlowState, GenerationFlow, GenerationForm, PromptChoice};
pub use models::{
    AspectRatio, BatchRequest, BatchResult, ComposerMode, GeneratedImage, GenerationMode,
    ImageApiRequest, ImageApiResponse, VisualStyle, MAX_VARIANTS,
};
pub use prompt::{optimize, optimize_labeled, QUALITY_SUFFIX};
pub use store::{ImageStore, JsonFileStore, MemoryStore, StoreManager};
