use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateRecipesRequest {
    #[validate(length(min = 1, message = "ingredients must be a non-empty array"))]
    pub ingredients: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema, Validate)]
pub struct GenerateImageRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "title must be between 1 and 500 characters"
    ))]
    #[schema(example = "Chicken and Broccoli Stir-Fry")]
    pub title: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateImageResponse {
    pub image_url: String,
}
