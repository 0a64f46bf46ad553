use tracing::instrument;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    recipe::{
        entities::{ImageOptions, ImageRef, RecipeBatch},
        helpers::parse_recipe_batch,
        ports::{LLMClient, RecipeGenerator, RecipeImageGenerator},
        prompts::{build_image_prompt, build_recipe_prompt},
        schema::get_recipe_schema,
    },
};

pub const EMPTY_INGREDIENTS_MESSAGE: &str = "Please add at least one ingredient.";
pub const EMPTY_TITLE_MESSAGE: &str = "The recipe title must be a non-empty string.";

impl<LLM> RecipeGenerator for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self), fields(ingredient_count = ingredients.len()))]
    async fn generate_recipes(&self, ingredients: Vec<String>) -> Result<RecipeBatch, CoreError> {
        if ingredients.iter().all(|i| i.trim().is_empty()) {
            return Err(CoreError::Validation(EMPTY_INGREDIENTS_MESSAGE.to_string()));
        }

        let prompt = build_recipe_prompt(
            &ingredients,
            self.generation.recipe_count,
            &self.generation.language,
        );

        let raw_response = self
            .llm_client
            .generate_with_text(prompt, get_recipe_schema())
            .await?;

        let recipes = parse_recipe_batch(&raw_response)?;
        tracing::info!(recipe_count = recipes.len(), "Generated recipes");

        Ok(recipes)
    }
}

impl<LLM> RecipeImageGenerator for Service<LLM>
where
    LLM: LLMClient,
{
    #[instrument(skip(self))]
    async fn generate_image(&self, title: String) -> Result<ImageRef, CoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation(EMPTY_TITLE_MESSAGE.to_string()));
        }

        let images = self
            .llm_client
            .generate_images(build_image_prompt(title), ImageOptions::default())
            .await?;

        images.into_iter().next().ok_or_else(|| {
            tracing::warn!("Image provider returned no images for \"{}\"", title);
            CoreError::NoImageProduced
        })
    }
}
