use crate::{
    error::{Result, VistagenError},
    models::{AspectRatio, ComposerMode, GenerationMode, VisualStyle, MAX_VARIANTS},
};

pub const MAX_SCENES: usize = 4;
pub const SIMPLE_SCENE_LIMIT: usize = 500;
pub const PRO_SCENE_LIMIT: usize = 300;

/// Everything the user edits before submitting a generation. Simple mode
/// uses a single scene; Pro joins up to [`MAX_SCENES`] scenes into one
/// prompt and unlocks the negative prompt.
#[derive(Debug, Clone)]
pub struct GenerationForm {
    pub composer: ComposerMode,
    pub scenes: Vec<String>,
    pub negative_prompt: String,
    pub style: VisualStyle,
    pub aspect_ratio: AspectRatio,
    pub mode: GenerationMode,
    pub variant_count: u32,
}

impl Default for GenerationForm {
    fn default() -> Self {
        Self {
            composer: ComposerMode::Simple,
            scenes: vec![String::new()],
            negative_prompt: String::new(),
            style: VisualStyle::Artistic,
            aspect_ratio: AspectRatio::Horizontal,
            mode: GenerationMode::Quality,
            variant_count: 1,
        }
    }
}

impl GenerationForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn scene_limit(&self) -> usize {
        match self.composer {
            ComposerMode::Simple => SIMPLE_SCENE_LIMIT,
            ComposerMode::Pro => PRO_SCENE_LIMIT,
        }
    }

    pub fn set_scene(&mut self, index: usize, text: impl Into<String>) -> Result<()> {
        let text = text.into();
        if text.chars().count() > self.scene_limit() {
            return Err(VistagenError::ValidationError(format!(
                "scene text exceeds {} characters",
                self.scene_limit()
            )));
        }
        let scene = self.scenes.get_mut(index).ok_or_else(|| {
            VistagenError::ValidationError(format!("no scene at index {}", index))
        })?;
        *scene = text;
        Ok(())
    }

    /// Add an empty scene slot (Pro mode). Returns false once the cap is hit.
    pub fn add_scene(&mut self) -> bool {
        if self.scenes.len() >= MAX_SCENES {
            return false;
        }
        self.scenes.push(String::new());
        true
    }

    /// Switching back to Simple keeps only the first scene.
    pub fn set_composer(&mut self, composer: ComposerMode) {
        self.composer = composer;
        if composer == ComposerMode::Simple && self.scenes.len() > 1 {
            self.scenes.truncate(1);
        }
    }

    pub fn set_variant_count(&mut self, count: u32) {
        self.variant_count = count.clamp(1, MAX_VARIANTS);
    }

    /// The raw base prompt: the single scene in Simple mode, the non-empty
    /// scenes joined with ". " in Pro mode.
    pub fn compose(&self) -> String {
        match self.composer {
            ComposerMode::Simple => self
                .scenes
                .first()
                .map(|s| s.trim().to_string())
                .unwrap_or_default(),
            ComposerMode::Pro => self
                .scenes
                .iter()
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>()
                .join(". "),
        }
    }

    /// Negative prompt, Pro mode only, blank treated as absent.
    pub fn negative(&self) -> Option<String> {
        if self.composer != ComposerMode::Pro {
            return None;
        }
        let trimmed = self.negative_prompt.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_mode_uses_first_scene() {
        let mut form = GenerationForm::new();
        form.set_scene(0, "  a quiet harbor at dawn  ").unwrap();
        assert_eq!(form.compose(), "a quiet harbor at dawn");
    }

    #[test]
    fn test_pro_mode_joins_non_empty_scenes() {
        let mut form = GenerationForm::new();
        form.set_composer(ComposerMode::Pro);
        form.set_scene(0, "a knight rides out").unwrap();
        assert!(form.add_scene());
        form.set_scene(1, "   ").unwrap();
        assert!(form.add_scene());
        form.set_scene(2, "the dragon appears").unwrap();
        assert_eq!(form.compose(), "a knight rides out. the dragon appears");
    }

    #[test]
    fn test_scene_cap() {
        let mut form = GenerationForm::new();
        form.set_composer(ComposerMode::Pro);
        assert!(form.add_scene());
        assert!(form.add_scene());
        assert!(form.add_scene());
        assert!(!form.add_scene());
        assert_eq!(form.scenes.len(), MAX_SCENES);
    }

    #[test]
    fn test_scene_length_limit() {
        let mut form = GenerationForm::new();
        let too_long = "x".repeat(SIMPLE_SCENE_LIMIT + 1);
        assert!(form.set_scene(0, too_long).is_err());
        assert!(form.set_scene(0, "x".repeat(SIMPLE_SCENE_LIMIT)).is_ok());
    }

    #[test]
    fn test_switching_to_simple_drops_extra_scenes() {
        let mut form = GenerationForm::new();
        form.set_composer(ComposerMode::Pro);
        form.add_scene();
        form.set_composer(ComposerMode::Simple);
        assert_eq!(form.scenes.len(), 1);
    }

    #[test]
    fn test_negative_prompt_only_in_pro_mode() {
        let mut form = GenerationForm::new();
        form.negative_prompt = "blur".to_string();
        assert_eq!(form.negative(), None);

        form.set_composer(ComposerMode::Pro);
        assert_eq!(form.negative(), Some("blur".to_string()));

        form.negative_prompt = "   ".to_string();
        assert_eq!(form.negative(), None);
    }

    #[test]
    fn test_variant_count_is_clamped() {
        let mut form = GenerationForm::new();
        form.set_variant_count(0);
        assert_eq!(form.variant_count, 1);
        form.set_variant_count(99);
        assert_eq!(form.variant_count, MAX_VARIANTS);
    }
}
