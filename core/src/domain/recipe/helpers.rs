use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;

use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::entities::{Recipe, RecipeBatch},
};

const LOGGED_PAYLOAD_CHARS: usize = 200;

/// Recipe fields the text provider must return. Anything else in the payload is ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecipePayload {
    title: String,
    description: String,
    prep_time: String,
    cook_time: String,
    ingredients: Vec<String>,
    instructions: Vec<String>,
}

impl From<RecipePayload> for Recipe {
    fn from(payload: RecipePayload) -> Self {
        Recipe {
            title: payload.title.trim().to_string(),
            description: payload.description,
            prep_time: payload.prep_time,
            cook_time: payload.cook_time,
            ingredients: payload.ingredients,
            instructions: payload.instructions,
            image_url: None,
        }
    }
}

/// Removes a leading "```json" or "```" marker and a trailing "```" marker.
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```json") {
        text = rest.trim();
    } else if let Some(rest) = text.strip_prefix("```") {
        text = rest.trim();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim();
    }
    text
}

/// Parses a raw text-provider payload into a recipe batch.
///
/// Accepts a JSON array of recipes, an object with a `recipes` array, or a
/// single recipe object, optionally wrapped in markdown code fences.
pub fn parse_recipe_batch(raw: &str) -> Result<RecipeBatch, CoreError> {
    if raw.trim().is_empty() {
        return Err(CoreError::EmptyResponse);
    }

    let body = strip_code_fences(raw);
    if !body.starts_with('[') && !body.starts_with('{') {
        tracing::error!(
            response = %body.chars().take(LOGGED_PAYLOAD_CHARS).collect::<String>(),
            "Recipe response was not in the expected JSON format"
        );
        return Err(CoreError::MalformedResponse);
    }

    let parsed: Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!("Failed to parse recipe response: {}", e);
        CoreError::SchemaViolation(format!("invalid JSON: {e}"))
    })?;

    let items = match parsed {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove("recipes") {
            Some(Value::Array(items)) => items,
            Some(_) => {
                return Err(CoreError::SchemaViolation(
                    "`recipes` must be an array".to_string(),
                ));
            }
            None => vec![Value::Object(map)],
        },
        _ => {
            return Err(CoreError::SchemaViolation(
                "expected an array of recipes".to_string(),
            ));
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let payload: RecipePayload = serde_json::from_value(item).map_err(|e| {
                tracing::error!("Invalid recipe format at index {}: {}", index, e);
                CoreError::SchemaViolation(format!("recipe {}: {e}", index + 1))
            })?;
            if payload.title.trim().is_empty() {
                return Err(CoreError::SchemaViolation(format!(
                    "recipe {} has an empty title",
                    index + 1
                )));
            }
            Ok(Recipe::from(payload))
        })
        .collect()
}

/// Makes every title in the batch unique by suffixing repeats with " (2)", " (3)", ...
///
/// Returns the number of recipes renamed.
pub fn disambiguate_titles(recipes: &mut [Recipe]) -> usize {
    let mut seen: HashSet<String> = HashSet::with_capacity(recipes.len());
    let mut renamed = 0;

    for recipe in recipes.iter_mut() {
        if seen.insert(recipe.title.clone()) {
            continue;
        }
        let mut suffix = 2;
        loop {
            let candidate = format!("{} ({suffix})", recipe.title);
            if seen.insert(candidate.clone()) {
                recipe.title = candidate;
                break;
            }
            suffix += 1;
        }
        renamed += 1;
    }

    renamed
}
