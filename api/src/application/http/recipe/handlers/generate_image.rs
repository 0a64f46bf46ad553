use axum::extract::State;
use chefgenie_core::domain::recipe::RecipeImageGenerator;

use crate::application::http::{
    recipe::validators::{GenerateImageRequest, GenerateImageResponse},
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/generate-image",
    tag = "generation",
    summary = "Generate a recipe image",
    description = "Generates one 4:3 photograph for a recipe title",
    request_body = GenerateImageRequest,
    responses(
        (status = 200, body = GenerateImageResponse),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn generate_image(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateImageRequest>,
) -> Result<Response<GenerateImageResponse>, ApiError> {
    let image = state
        .service
        .generate_image(payload.title)
        .await
        .map_err(|e| {
            tracing::error!("Image generation failed: {}", e);
            ApiError::from_generation("Failed to generate image", e)
        })?;

    Ok(Response::OK(GenerateImageResponse {
        image_url: image.into_inner(),
    }))
}
