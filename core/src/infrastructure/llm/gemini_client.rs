use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use url::Url;

use crate::{
    domain::{
        common::{LLMConfig, entities::app_errors::CoreError},
        recipe::{
            entities::{ImageOptions, ImageRef},
            ports::LLMClient,
        },
    },
    infrastructure::http::provider_error,
};

#[derive(Debug, Clone)]
pub struct GeminiLLMClient {
    api_key: String,
    base_url: Url,
    text_model: String,
    image_model: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    response_mime_type: String,
    response_schema: serde_json::Value,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Debug, Deserialize)]
struct ContentResponse {
    #[serde(default)]
    parts: Vec<PartResponse>,
}

#[derive(Debug, Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Debug, Serialize)]
struct PredictRequest {
    instances: Vec<PredictInstance>,
    parameters: PredictParameters,
}

#[derive(Debug, Serialize)]
struct PredictInstance {
    prompt: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PredictParameters {
    sample_count: u32,
    aspect_ratio: String,
    output_options: OutputOptions,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputOptions {
    mime_type: String,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    #[serde(default)]
    predictions: Vec<Prediction>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Prediction {
    bytes_base64_encoded: Option<String>,
    mime_type: Option<String>,
}

impl GeminiLLMClient {
    pub fn new(config: &LLMConfig) -> Result<Self, CoreError> {
        if config.gemini_api_key.trim().is_empty() {
            return Err(CoreError::MissingCredential(
                "a Gemini API key is required".to_string(),
            ));
        }

        let base_url = Url::parse(&config.gemini_base_url).map_err(|e| {
            CoreError::InvalidConfiguration(format!(
                "invalid Gemini base URL '{}': {}",
                config.gemini_base_url, e
            ))
        })?;

        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| CoreError::InvalidConfiguration(format!("HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.gemini_api_key.clone(),
            base_url,
            text_model: config.text_model.clone(),
            image_model: config.image_model.clone(),
            client,
        })
    }

    fn model_url(&self, model: &str, action: &str) -> String {
        format!(
            "{}/v1beta/models/{}:{}?key={}",
            self.base_url.as_str().trim_end_matches('/'),
            model,
            action,
            self.api_key
        )
    }

    async fn call_gemini_api<B, R>(&self, url: &str, body: &B) -> Result<R, CoreError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| {
                // the request URL carries the API key
                let e = e.without_url();
                tracing::error!("Gemini API request failed: {}", e);
                CoreError::ProviderUnavailable(format!("LLM API error: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            tracing::error!("Gemini API error: {} - {}", status, error_text);
            return Err(provider_error(status.as_u16(), &error_text));
        }

        response.json::<R>().await.map_err(|e| {
            tracing::error!("Failed to parse Gemini response: {}", e);
            CoreError::ProviderUnavailable(format!("Failed to parse LLM response: {}", e))
        })
    }
}

/// Joins the text parts of the first candidate. Empty when the model returned none.
fn extract_text(response: GeminiResponse) -> String {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|p| p.text)
                .collect::<String>()
        })
        .unwrap_or_default()
}

fn extract_images(response: PredictResponse, fallback_mime_type: &str) -> Vec<ImageRef> {
    response
        .predictions
        .into_iter()
        .filter_map(|prediction| {
            let data = prediction.bytes_base64_encoded.filter(|d| !d.is_empty())?;
            let mime_type = prediction
                .mime_type
                .unwrap_or_else(|| fallback_mime_type.to_string());
            Some(ImageRef::data_uri(&mime_type, &data))
        })
        .collect()
}

impl LLMClient for GeminiLLMClient {
    async fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> Result<String, CoreError> {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: Some(GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema,
            }),
        };

        let url = self.model_url(&self.text_model, "generateContent");
        let response: GeminiResponse = self.call_gemini_api(&url, &request).await?;

        Ok(extract_text(response))
    }

    async fn generate_images(
        &self,
        prompt: String,
        options: ImageOptions,
    ) -> Result<Vec<ImageRef>, CoreError> {
        let request = PredictRequest {
            instances: vec![PredictInstance { prompt }],
            parameters: PredictParameters {
                sample_count: options.number_of_images,
                aspect_ratio: options.aspect_ratio,
                output_options: OutputOptions {
                    mime_type: options.mime_type.clone(),
                },
            },
        };

        let url = self.model_url(&self.image_model, "predict");
        let response: PredictResponse = self.call_gemini_api(&url, &request).await?;

        Ok(extract_images(response, &options.mime_type))
    }
}
