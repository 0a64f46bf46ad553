use std::sync::Arc;

use crate::domain::{common::GenerationConfig, recipe::ports::LLMClient};

/// Provider-backed implementation of the recipe and image generator ports.
#[derive(Debug)]
pub struct Service<LLM>
where
    LLM: LLMClient,
{
    pub(crate) llm_client: Arc<LLM>,
    pub(crate) generation: GenerationConfig,
}

impl<LLM> Clone for Service<LLM>
where
    LLM: LLMClient,
{
    fn clone(&self) -> Self {
        Self {
            llm_client: Arc::clone(&self.llm_client),
            generation: self.generation.clone(),
        }
    }
}

impl<LLM> Service<LLM>
where
    LLM: LLMClient,
{
    pub fn new(llm_client: LLM, generation: GenerationConfig) -> Self {
        Self {
            llm_client: Arc::new(llm_client),
            generation,
        }
    }
}
