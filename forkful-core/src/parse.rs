use crate::{ForkfulError, Recipe};

/// Parse the provider's structured output into a [`Recipe`].
///
/// The provider is asked for strict JSON, but some models still wrap the
/// payload in a markdown code fence, so that is stripped first. Any remaining
/// mismatch is a schema violation surfaced as a recoverable error.
pub fn recipe_from_text(text: &str) -> Result<Recipe, ForkfulError> {
    let cleaned = text.trim();
    let cleaned = if cleaned.starts_with("```json") {
        cleaned
            .trim_start_matches("```json")
            .trim_end_matches("```")
            .trim()
    } else if cleaned.starts_with("```") {
        cleaned
            .trim_start_matches("```")
            .trim_end_matches("```")
            .trim()
    } else {
        cleaned
    };

    if cleaned.is_empty() {
        return Err(ForkfulError::SchemaValidation {
            reason: "empty completion content".to_string(),
        });
    }

    serde_json::from_str(cleaned).map_err(|err| ForkfulError::SchemaValidation {
        reason: err.to_string(),
    })
}
