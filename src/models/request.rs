use crate::{
    error::{Result, VistagenError},
    models::{AspectRatio, VisualStyle},
};
use serde::{Deserialize, Serialize};

/// Upper bound on variants per batch; one API request is issued per variant.
pub const MAX_VARIANTS: u32 = 4;

/// One generation action. `prompt` is the text actually sent (the user may
/// have picked the original or the optimized wording); `original_prompt` is
/// what they typed, kept for the stored record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub prompt: String,
    pub original_prompt: String,
    pub style: VisualStyle,
    pub variant_count: u32,
    pub aspect_ratio: AspectRatio,
    pub negative_prompt: Option<String>,
}

impl BatchRequest {
    pub fn new(
        prompt: impl Into<String>,
        original_prompt: impl Into<String>,
        style: VisualStyle,
        variant_count: u32,
        aspect_ratio: AspectRatio,
    ) -> Self {
        Self {
            prompt: prompt.into(),
            original_prompt: original_prompt.into(),
            style,
            variant_count,
            aspect_ratio,
            negative_prompt: None,
        }
    }

    pub fn with_negative_prompt(mut self, negative_prompt: impl Into<String>) -> Self {
        self.negative_prompt = Some(negative_prompt.into());
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.prompt.trim().is_empty() {
            return Err(VistagenError::ValidationError(
                "prompt must not be empty".into(),
            ));
        }
        if self.variant_count == 0 || self.variant_count > MAX_VARIANTS {
            return Err(VistagenError::ValidationError(format!(
                "variant count must be between 1 and {}, got {}",
                MAX_VARIANTS, self.variant_count
            )));
        }
        Ok(())
    }

    /// The prompt as sent on the wire: the chosen text plus the avoidance
    /// clause when a non-blank negative prompt is present.
    pub fn composed_prompt(&self) -> String {
        let mut full = self.prompt.trim().to_string();
        if let Some(negative) = &self.negative_prompt {
            let negative = negative.trim();
            if !negative.is_empty() {
                full.push_str(". Avoid the following: ");
                full.push_str(negative);
            }
        }
        full
    }
}
