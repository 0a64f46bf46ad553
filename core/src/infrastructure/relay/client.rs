use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    domain::{
        common::{RelayConfig, entities::app_errors::CoreError},
        recipe::{
            entities::{ImageRef, RecipeBatch},
            helpers::parse_recipe_batch,
            ports::{RecipeGenerator, RecipeImageGenerator},
        },
    },
    infrastructure::http::provider_error,
};

/// Client for the generation relay exposed by `chefgenie-api`.
#[derive(Debug, Clone)]
pub struct RelayClient {
    base_url: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GenerateRecipesBody {
    ingredients: Vec<String>,
}

#[derive(Debug, Serialize)]
struct GenerateImageBody {
    title: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateImageResponse {
    image_url: Option<String>,
}

impl RelayClient {
    pub fn new(config: &RelayConfig) -> Result<Self, CoreError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            CoreError::InvalidConfiguration(format!(
                "invalid relay URL '{}': {}",
                config.base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CoreError::InvalidConfiguration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    /// Posts `body` to the relay and returns the raw response text of a 2xx answer.
    async fn post<B: Serialize>(&self, path: &str, body: &B) -> Result<String, CoreError> {
        let url = self.endpoint(path);
        let response = self.client.post(&url).json(body).send().await.map_err(|e| {
            tracing::error!("Relay request to {} failed: {}", url, e);
            CoreError::ProviderUnavailable(format!("Could not reach the recipe service: {}", e))
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!("Failed to read relay response from {}: {}", url, e);
            CoreError::ProviderUnavailable(format!("Failed to read relay response: {}", e))
        })?;

        if !status.is_success() {
            tracing::error!("Relay error: {} - {}", status, text);
            return Err(provider_error(status.as_u16(), &text));
        }

        Ok(text)
    }
}

impl RecipeGenerator for RelayClient {
    async fn generate_recipes(&self, ingredients: Vec<String>) -> Result<RecipeBatch, CoreError> {
        let body = self
            .post("generate-recipes", &GenerateRecipesBody { ingredients })
            .await?;
        parse_recipe_batch(&body)
    }
}

impl RecipeImageGenerator for RelayClient {
    async fn generate_image(&self, title: String) -> Result<ImageRef, CoreError> {
        let body = self
            .post("generate-image", &GenerateImageBody { title })
            .await?;

        let response: GenerateImageResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::error!("Failed to parse relay image response: {}", e);
            CoreError::ProviderUnavailable(format!("Failed to parse relay response: {}", e))
        })?;

        response
            .image_url
            .filter(|url| !url.is_empty())
            .map(ImageRef::new)
            .ok_or(CoreError::NoImageProduced)
    }
}
