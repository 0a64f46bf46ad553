const SYSTEM_INSTRUCTION: &str = "You are a master chef who specializes in creating great \
recipes from a limited set of ingredients. Your task is to produce a list of recipes in JSON \
format, strictly following the provided schema.";

/// Builds the text-generation prompt for a batch of `count` recipes.
pub fn build_recipe_prompt(ingredients: &[String], count: usize, language: &str) -> String {
    format!(
        "{SYSTEM_INSTRUCTION} Always answer in {language}.\n\n---\n\n\
         Create {count} creative and distinct recipes using mainly the following ingredients: {}. \
         You may assume basic pantry staples such as salt, pepper, oil and water are available. \
         Give every recipe a different title. For each recipe provide a title, a short \
         description, the preparation time, the cooking time, the full list of ingredients with \
         quantities and step-by-step instructions.",
        ingredients.join(", ")
    )
}

/// Builds the image prompt for a recipe. Only the title is used.
pub fn build_image_prompt(title: &str) -> String {
    format!(
        "A professional, high-quality and appetizing food photo of \"{title}\". The dish is \
         nicely plated, with studio lighting and a clean, blurred background. Menu photo style."
    )
}
