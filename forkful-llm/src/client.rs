use std::time::{Duration, Instant};

use secrecy::{ExposeSecret, SecretString};
use url::Url;

use forkful_core::{
    cost_usd, recipe_from_text, FailureMetadata, ForkfulError, GenerationMetadata,
    GenerationResult,
};
use forkful_prompt::{build_user_prompt, recipe_system_prompt};

use crate::schema::recipe_response_format;
use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse, ChatMessage};

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

const DEFAULT_TEMPERATURE: f32 = 0.7;
const DEFAULT_MAX_TOKENS: u32 = 1000;
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Client issuing one schema-constrained chat completion per generation.
///
/// A single failed attempt is surfaced directly as a
/// [`GenerationResult::Failure`]; the client never retries and never
/// persists anything.
#[derive(Clone)]
pub struct RecipeClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

pub struct RecipeClientBuilder {
    base_url: String,
    api_key: Option<SecretString>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    timeout: Duration,
}

impl Default for RecipeClientBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl RecipeClientBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Result<Self, ForkfulError> {
        let base_url = base_url.into();
        Url::parse(&base_url)
            .map_err(|err| ForkfulError::InvalidConfig(format!("invalid base URL: {err}")))?;
        self.base_url = base_url.trim_end_matches('/').to_string();
        Ok(self)
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(api_key.into()));
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<RecipeClient, ForkfulError> {
        let api_key = self
            .api_key
            .ok_or_else(|| ForkfulError::InvalidConfig("missing API key".to_string()))?;
        let http = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(|err| ForkfulError::InvalidConfig(err.to_string()))?;
        Ok(RecipeClient {
            http,
            base_url: self.base_url,
            api_key,
            model: self.model,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        })
    }
}

impl RecipeClient {
    pub fn builder() -> RecipeClientBuilder {
        RecipeClientBuilder::default()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate one recipe from the given ingredients. Provider failures,
    /// HTTP errors and schema violations all come back as `Failure` with the
    /// metadata known at that point.
    pub async fn generate(
        &self,
        ingredients: &[String],
        dietary: Option<&[String]>,
    ) -> GenerationResult {
        let started = Instant::now();

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(recipe_system_prompt()),
                ChatMessage::user(build_user_prompt(ingredients, dietary)),
            ],
            temperature: Some(self.temperature),
            max_tokens: Some(self.max_tokens),
            response_format: recipe_response_format(),
        };

        let response = match self.complete(&request).await {
            Ok(response) => response,
            Err(err) => return self.failure(ingredients, err.to_string(), started),
        };

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        match recipe_from_text(&content) {
            Ok(recipe) => {
                let usage = response.usage.unwrap_or_default();
                let dietary_requirements = dietary
                    .map(<[String]>::to_vec)
                    .filter(|restrictions| !restrictions.is_empty());
                GenerationResult::Success {
                    recipe,
                    metadata: GenerationMetadata {
                        model: self.model.clone(),
                        input_ingredients: ingredients.to_vec(),
                        dietary_requirements,
                        prompt_tokens: usage.prompt_tokens,
                        completion_tokens: usage.completion_tokens,
                        total_tokens: usage.total_tokens,
                        latency_seconds: started.elapsed().as_secs_f64(),
                        cost_usd: cost_usd(&self.model, usage.prompt_tokens, usage.completion_tokens),
                    },
                    raw_text: content,
                }
            }
            Err(err) => self.failure(ingredients, err.to_string(), started),
        }
    }

    async fn complete(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ForkfulError> {
        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .http
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(request)
            .send()
            .await
            .map_err(|err| ForkfulError::Provider(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiErrorResponse>(&body)
                .map(|parsed| parsed.error.message)
                .unwrap_or(body);
            return Err(ForkfulError::Provider(format!("{status}: {message}")));
        }

        response
            .json()
            .await
            .map_err(|err| ForkfulError::Provider(err.to_string()))
    }

    fn failure(
        &self,
        ingredients: &[String],
        message: String,
        started: Instant,
    ) -> GenerationResult {
        tracing::warn!(model = %self.model, %message, "recipe generation failed");
        GenerationResult::Failure {
            message,
            metadata: FailureMetadata {
                model: self.model.clone(),
                input_ingredients: ingredients.to_vec(),
                latency_seconds: started.elapsed().as_secs_f64(),
            },
        }
    }
}
