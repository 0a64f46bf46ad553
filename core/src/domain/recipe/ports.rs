use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{ImageOptions, ImageRef, RecipeBatch},
};

/// LLM Client trait for calling the text and image models
#[cfg_attr(test, mockall::automock)]
pub trait LLMClient: Send + Sync {
    /// Returns the raw text of the model's answer, possibly empty.
    fn generate_with_text(
        &self,
        prompt: String,
        response_schema: serde_json::Value,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;

    fn generate_images(
        &self,
        prompt: String,
        options: ImageOptions,
    ) -> impl Future<Output = Result<Vec<ImageRef>, CoreError>> + Send;
}

/// Produces a batch of recipes, without images, from a list of ingredients.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeGenerator: Send + Sync {
    fn generate_recipes(
        &self,
        ingredients: Vec<String>,
    ) -> impl Future<Output = Result<RecipeBatch, CoreError>> + Send;
}

/// Produces one illustrative image for a recipe title.
#[cfg_attr(test, mockall::automock)]
pub trait RecipeImageGenerator: Send + Sync {
    fn generate_image(&self, title: String)
    -> impl Future<Output = Result<ImageRef, CoreError>> + Send;
}
