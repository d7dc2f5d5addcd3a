use thiserror::Error;

#[derive(Debug, Error)]
pub enum ForkfulError {
    #[error("LLM provider failed: {0}")]
    Provider(String),
    #[error("Structured output did not match the recipe schema: {reason}")]
    SchemaValidation { reason: String },
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Serialization/deserialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
