use serde::{Deserialize, Serialize};

/// One request to the external image API, covering a single variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageApiRequest {
    pub prompt: String,
    /// Per-variant randomized seed so identical prompts still diverge.
    pub seed: u32,
    pub width: u32,
    pub height: u32,
    pub output_format: String,
}

/// Normalized API response: each entry is a displayable image reference
/// (`data:` URL or remote URL).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageApiResponse {
    pub images: Vec<String>,
}
