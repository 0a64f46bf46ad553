use std::sync::Arc;

use crate::{
    domain::{
        common::{
            ChefGenieConfig, GenerationConfig, RelayConfig, entities::app_errors::CoreError,
            services::Service,
        },
        generation::GenerationOrchestrator,
    },
    infrastructure::{llm::GeminiLLMClient, relay::RelayClient},
};

pub type ChefGenieService = Service<GeminiLLMClient>;

/// Orchestrator calling the model provider directly.
pub type DirectOrchestrator = GenerationOrchestrator<ChefGenieService, ChefGenieService>;

/// Orchestrator calling the generation relay.
pub type RelayOrchestrator = GenerationOrchestrator<RelayClient, RelayClient>;

pub fn create_service(config: ChefGenieConfig) -> Result<ChefGenieService, CoreError> {
    let llm_client = GeminiLLMClient::new(&config.llm)?;
    tracing::info!(
        text_model = %config.llm.text_model,
        image_model = %config.llm.image_model,
        "Gemini client configured"
    );

    Ok(Service::new(llm_client, config.generation))
}

pub fn create_orchestrator(config: ChefGenieConfig) -> Result<DirectOrchestrator, CoreError> {
    let generation = config.generation.clone();
    let service = Arc::new(create_service(config)?);

    Ok(GenerationOrchestrator::new(
        Arc::clone(&service),
        service,
        generation,
    ))
}

pub fn create_relay_orchestrator(
    relay: RelayConfig,
    generation: GenerationConfig,
) -> Result<RelayOrchestrator, CoreError> {
    let client = Arc::new(RelayClient::new(&relay)?);

    Ok(GenerationOrchestrator::new(
        Arc::clone(&client),
        client,
        generation,
    ))
}
