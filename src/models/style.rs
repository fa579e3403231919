use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of visual styles a generation can be flavored with.
/// Each style owns exactly one prompt template (see `crate::prompt`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualStyle {
    Artistic,
    Realistic,
    Anime,
    Cartoon,
    Fantasy,
    SciFi,
    Abstract,
    Model3d,
    PixelArt,
}

impl VisualStyle {
    pub const ALL: [VisualStyle; 9] = [
        VisualStyle::Artistic,
        VisualStyle::Realistic,
        VisualStyle::Anime,
        VisualStyle::Cartoon,
        VisualStyle::Fantasy,
        VisualStyle::SciFi,
        VisualStyle::Abstract,
        VisualStyle::Model3d,
        VisualStyle::PixelArt,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisualStyle::Artistic => "Artistic",
            VisualStyle::Realistic => "Realistic",
            VisualStyle::Anime => "Anime",
            VisualStyle::Cartoon => "Cartoon",
            VisualStyle::Fantasy => "Fantasy",
            VisualStyle::SciFi => "Sci-Fi",
            VisualStyle::Abstract => "Abstract",
            VisualStyle::Model3d => "3D Model",
            VisualStyle::PixelArt => "Pixel Art",
        }
    }

    /// Parse a user-facing label. Unknown labels yield `None`, which callers
    /// treat as "no style": the prompt passes through untemplated.
    pub fn parse(label: &str) -> Option<VisualStyle> {
        let label = label.trim();
        Self::ALL
            .iter()
            .find(|style| style.label().eq_ignore_ascii_case(label))
            .copied()
    }
}

impl fmt::Display for VisualStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AspectRatio {
    Horizontal,
    Vertical,
}

impl AspectRatio {
    pub fn token(&self) -> &'static str {
        match self {
            AspectRatio::Horizontal => "16:9",
            AspectRatio::Vertical => "9:16",
        }
    }

    /// Pixel dimensions sent to the image API as (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            AspectRatio::Horizontal => (1280, 720),
            AspectRatio::Vertical => (720, 1280),
        }
    }
}

/// Quality mode appends the booster suffix to optimized prompts; Fast skips it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenerationMode {
    Quality,
    Fast,
}

/// Simple composes a single scene; Pro joins several scenes into one prompt
/// and unlocks the negative prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComposerMode {
    Simple,
    Pro,
}
