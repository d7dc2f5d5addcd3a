mod client;
mod schema;
mod types;

pub use client::{RecipeClient, RecipeClientBuilder, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use schema::recipe_response_format;
pub use types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, Choice, JsonSchemaSpec,
    ResponseFormat, ResponseMessage, Role, Usage,
};

pub use forkful_core::{GenerationMetadata, GenerationResult, Recipe};
