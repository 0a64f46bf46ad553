use std::sync::Arc;

use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::recipe::entities::Recipe;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GenerationPhase {
    #[default]
    Idle,
    GeneratingText,
    GeneratingImages,
}

impl GenerationPhase {
    pub fn is_busy(&self) -> bool {
        !matches!(self, GenerationPhase::Idle)
    }
}

/// An image call that did not produce an image. Kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImageFailure {
    pub title: String,
    pub message: String,
}

/// Read-only snapshot of a generation run handed to the presentation layer.
///
/// Every publish replaces the shared slices rather than writing into them, so a
/// snapshot held by a consumer never changes underneath it.
#[derive(Debug, Clone)]
pub struct GenerationView {
    pub run_id: Option<Uuid>,
    pub phase: GenerationPhase,
    pub recipes: Arc<[Recipe]>,
    pub error: Option<String>,
    pub image_failures: Arc<[ImageFailure]>,
}

impl Default for GenerationView {
    fn default() -> Self {
        Self {
            run_id: None,
            phase: GenerationPhase::Idle,
            recipes: Arc::from(Vec::new()),
            error: None,
            image_failures: Arc::from(Vec::new()),
        }
    }
}

impl GenerationView {
    pub fn is_loading_text(&self) -> bool {
        self.phase == GenerationPhase::GeneratingText
    }

    pub fn is_loading_images(&self) -> bool {
        self.phase == GenerationPhase::GeneratingImages
    }

    pub fn recipe(&self, title: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|r| r.title == title)
    }
}
