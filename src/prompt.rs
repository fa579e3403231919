//! Client-side prompt engineering. Wraps the user's raw scene description in
//! a style-specific English template so the image model's native style
//! understanding does the heavy lifting, and optionally appends a quality
//! booster suffix. Pure functions, safe to call repeatedly.

use crate::models::{GenerationMode, VisualStyle};

/// Appended to the outgoing prompt in Quality mode.
pub const QUALITY_SUFFIX: &str = ", masterpiece, best quality, highly detailed";

fn apply_template(style: VisualStyle, prompt: &str) -> String {
    match style {
        VisualStyle::Artistic => format!(
            "An expressive painting of \"{}\", striking composition, dramatic lighting, rich brushwork, concept art, trending on artstation.",
            prompt
        ),
        VisualStyle::Realistic => format!(
            "A photorealistic, ultra-detailed photograph of \"{}\", 8k, razor-sharp focus, professional color grading, shot on a full-frame DSLR with a 50mm prime lens.",
            prompt
        ),
        VisualStyle::Anime => format!(
            "A beautiful anime scene of \"{}\", in the style of Studio Ghibli and Makoto Shinkai, vivid colors, lovingly detailed background, cinematic lighting.",
            prompt
        ),
        VisualStyle::Cartoon => format!(
            "A playful cartoon illustration of \"{}\", modern western animation style, bold clean outlines, saturated colors, expressive characters.",
            prompt
        ),
        VisualStyle::Fantasy => format!(
            "An epic fantasy book cover illustration of \"{}\", with sweeping landscapes, mythical creatures, ornate armor and glowing magical elements.",
            prompt
        ),
        VisualStyle::SciFi => format!(
            "Futuristic sci-fi concept art of \"{}\", advanced technology, sleek machinery, neon glow, a cyberpunk and space opera aesthetic.",
            prompt
        ),
        VisualStyle::Abstract => format!(
            "An abstract artwork representing \"{}\", geometric shapes, bold color fields, non-representational forms, strong focus on texture and composition.",
            prompt
        ),
        VisualStyle::Model3d => format!(
            "A high-quality 3D render of \"{}\", modeled in Blender and rendered in Octane, physically based materials, fine surface detail, studio lighting.",
            prompt
        ),
        VisualStyle::PixelArt => format!(
            "A detailed pixel art scene of \"{}\", 16-bit, vibrant limited palette, reminiscent of classic SNES games.",
            prompt
        ),
    }
}

/// Build the enhanced prompt for a style. A trimmed-empty input yields an
/// empty string with no template and no suffix.
pub fn optimize(prompt: &str, style: VisualStyle, mode: GenerationMode) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let mut enhanced = apply_template(style, trimmed);
    if mode == GenerationMode::Quality {
        enhanced.push_str(QUALITY_SUFFIX);
    }
    enhanced
}

/// Like [`optimize`], but the style arrives as a runtime label. An
/// unrecognized label keeps the trimmed prompt as written (identity
/// template); the mode suffix still applies.
pub fn optimize_labeled(prompt: &str, label: &str, mode: GenerationMode) -> String {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match VisualStyle::parse(label) {
        Some(style) => optimize(trimmed, style, mode),
        None => {
            let mut enhanced = trimmed.to_string();
            if mode == GenerationMode::Quality {
                enhanced.push_str(QUALITY_SUFFIX);
            }
            enhanced
        }
    }
}
