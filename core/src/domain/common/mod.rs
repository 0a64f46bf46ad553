use std::time::Duration;

use uuid::Uuid;

pub mod entities;
pub mod services;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TEXT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_IMAGE_MODEL: &str = "imagen-4.0-generate-001";

#[derive(Clone, Debug)]
pub struct ChefGenieConfig {
    pub llm: LLMConfig,
    pub generation: GenerationConfig,
}

#[derive(Clone, Debug)]
pub struct LLMConfig {
    pub gemini_api_key: String,
    pub gemini_base_url: String,
    pub text_model: String,
    pub image_model: String,
    pub request_timeout: Duration,
}

impl LLMConfig {
    pub fn new(gemini_api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: gemini_api_key.into(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            text_model: DEFAULT_TEXT_MODEL.to_string(),
            image_model: DEFAULT_IMAGE_MODEL.to_string(),
            request_timeout: Duration::from_secs(120),
        }
    }
}

/// Tuning for a generation run.
#[derive(Clone, Debug)]
pub struct GenerationConfig {
    /// Number of recipes requested from the text provider.
    pub recipe_count: usize,
    /// Language the recipes are written in.
    pub language: String,
    /// Upper bound on simultaneous image calls; `None` issues one per recipe at once.
    pub image_concurrency: Option<usize>,
    /// Deadline for a single image call.
    pub image_timeout: Duration,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            recipe_count: 3,
            language: "English".to_string(),
            image_concurrency: None,
            image_timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Clone, Debug)]
pub struct RelayConfig {
    pub base_url: String,
    pub request_timeout: Duration,
}

impl RelayConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            request_timeout: Duration::from_secs(120),
        }
    }
}

pub fn generate_uuid_v7() -> Uuid {
    Uuid::now_v7()
}
