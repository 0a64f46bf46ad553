use axum::extract::State;
use chefgenie_core::domain::{
    ingredient::IngredientSet,
    recipe::{Recipe, RecipeGenerator},
};

use crate::application::http::{
    recipe::validators::GenerateRecipesRequest,
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
    path = "/generate-recipes",
    tag = "generation",
    summary = "Generate recipes",
    description = "Generates a batch of recipes that use the given ingredients",
    request_body = GenerateRecipesRequest,
    responses(
        (status = 200, body = Vec<Recipe>),
        (status = 400, body = ApiErrorResponse),
        (status = 500, body = ApiErrorResponse),
    ),
)]
pub async fn generate_recipes(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GenerateRecipesRequest>,
) -> Result<Response<Vec<Recipe>>, ApiError> {
    let ingredients: IngredientSet = payload.ingredients.iter().map(String::as_str).collect();

    let recipes = state
        .service
        .generate_recipes(ingredients.snapshot())
        .await
        .map_err(|e| {
            tracing::error!("Recipe generation failed: {}", e);
            ApiError::from_generation("Failed to generate recipes", e)
        })?;

    Ok(Response::OK(recipes))
}
