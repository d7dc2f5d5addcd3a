use serde_json::json;

use crate::types::{JsonSchemaSpec, ResponseFormat};

/// The fixed response format asking the provider to emit a recipe that
/// matches [`forkful_core::Recipe`] exactly.
pub fn recipe_response_format() -> ResponseFormat {
    ResponseFormat {
        format_type: "json_schema".to_string(),
        json_schema: JsonSchemaSpec {
            name: "recipe".to_string(),
            strict: true,
            schema: json!({
                "type": "object",
                "properties": {
                    "name": {
                        "type": "string",
                        "description": "Name of the recipe"
                    },
                    "ingredients": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "List of ingredients with quantities"
                    },
                    "instructions": {
                        "type": "array",
                        "items": {"type": "string"},
                        "description": "Step-by-step cooking instructions"
                    },
                    "cooking_time": {
                        "type": "string",
                        "description": "Estimated cooking time"
                    },
                    "servings": {
                        "type": "integer",
                        "description": "Number of servings"
                    }
                },
                "required": ["name", "ingredients", "instructions", "cooking_time", "servings"],
                "additionalProperties": false
            }),
        },
    }
}
