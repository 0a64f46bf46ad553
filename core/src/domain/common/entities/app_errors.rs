use thiserror::Error;

/// Errors raised by recipe generation, from input validation to provider failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("{0}")]
    Validation(String),

    #[error("Received an empty response from the recipe provider.")]
    EmptyResponse,

    #[error("The AI response was not in the expected JSON format. Please try again.")]
    MalformedResponse,

    #[error("The AI response did not match the recipe format: {0}")]
    SchemaViolation(String),

    #[error("{0}")]
    ProviderUnavailable(String),

    #[error("No image was generated.")]
    NoImageProduced,

    #[error(
        "Our AI chef couldn't create recipes with these ingredients. Please try a different combination!"
    )]
    NoUsableRecipes,

    #[error("Missing credential: {0}")]
    MissingCredential(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl CoreError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}
