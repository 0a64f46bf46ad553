use serde_json::json;

/// Returns the JSON schema the text provider is asked to honor for a recipe batch.
pub fn get_recipe_schema() -> serde_json::Value {
    json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "title": {
                    "type": "string",
                    "description": "The name of the recipe."
                },
                "description": {
                    "type": "string",
                    "description": "A short, appealing description of the dish."
                },
                "prepTime": {
                    "type": "string",
                    "description": "Estimated preparation time, e.g. '15 minutes'."
                },
                "cookTime": {
                    "type": "string",
                    "description": "Estimated cooking time, e.g. '30 minutes'."
                },
                "ingredients": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "description": "A single ingredient with its quantity."
                    }
                },
                "instructions": {
                    "type": "array",
                    "items": {
                        "type": "string",
                        "description": "A single preparation step."
                    }
                }
            },
            "required": [
                "title", "description", "prepTime", "cookTime", "ingredients", "instructions"
            ]
        }
    })
}
