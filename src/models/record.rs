use crate::models::{AspectRatio, VisualStyle};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One successfully generated variant. Immutable after creation except for
/// `is_public` and `votes`, which the gallery/ranking operations mutate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedImage {
    pub id: String,
    /// Displayable reference: a `data:` URL with the encoded payload, or a
    /// remote URL passed through from the API.
    pub url: String,
    /// The prompt as the user typed it.
    pub prompt: String,
    /// The prompt that was approved for generation, before the negative
    /// clause was appended.
    pub enhanced_prompt: String,
    pub style: VisualStyle,
    /// Epoch milliseconds.
    pub timestamp: i64,
    pub aspect_ratio: AspectRatio,
    pub is_public: bool,
    pub votes: i32,
}

impl GeneratedImage {
    pub fn new(
        url: impl Into<String>,
        prompt: impl Into<String>,
        enhanced_prompt: impl Into<String>,
        style: VisualStyle,
        aspect_ratio: AspectRatio,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            url: url.into(),
            prompt: prompt.into(),
            enhanced_prompt: enhanced_prompt.into(),
            style,
            timestamp: Utc::now().timestamp_millis(),
            aspect_ratio,
            is_public: false,
            votes: 0,
        }
    }
}

/// What one orchestrator invocation produced. `images` holds only the
/// successes; the counts let callers surface a partial batch without
/// treating it as an error.
#[derive(Debug, Clone)]
pub struct BatchResult {
    pub images: Vec<GeneratedImage>,
    pub requested: u32,
    pub succeeded: u32,
}

impl BatchResult {
    pub fn is_partial(&self) -> bool {
        self.succeeded > 0 && self.succeeded < self.requested
    }
}
