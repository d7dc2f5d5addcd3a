use serde::{Deserialize, Serialize};

/// A generated recipe. All fields are required; the provider's structured
/// output must deserialize into this shape exactly.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct Recipe {
    pub name: String,
    /// Ingredients with quantities, in the order they are used.
    pub ingredients: Vec<String>,
    /// Step-by-step cooking instructions.
    pub instructions: Vec<String>,
    pub cooking_time: String,
    pub servings: u32,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct GenerationMetadata {
    pub model: String,
    pub input_ingredients: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dietary_requirements: Option<Vec<String>>,
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
    pub latency_seconds: f64,
    pub cost_usd: f64,
}

/// The metadata known when a generation call fails partway through.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct FailureMetadata {
    pub model: String,
    pub input_ingredients: Vec<String>,
    pub latency_seconds: f64,
}

/// Outcome of one generation call. Exactly one of the two variants, created
/// per call and discarded after display/logging.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GenerationResult {
    Success {
        recipe: Recipe,
        metadata: GenerationMetadata,
        raw_text: String,
    },
    Failure {
        message: String,
        metadata: FailureMetadata,
    },
}

impl GenerationResult {
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationResult::Success { .. })
    }

    pub fn model(&self) -> &str {
        match self {
            GenerationResult::Success { metadata, .. } => &metadata.model,
            GenerationResult::Failure { metadata, .. } => &metadata.model,
        }
    }

    pub fn latency_seconds(&self) -> f64 {
        match self {
            GenerationResult::Success { metadata, .. } => metadata.latency_seconds,
            GenerationResult::Failure { metadata, .. } => metadata.latency_seconds,
        }
    }
}
