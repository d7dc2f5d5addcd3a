use secrecy::SecretString;

use forkful_braintrust::BraintrustConfig;
use forkful_core::ForkfulError;
use forkful_langfuse::LangfuseConfig;
use forkful_llm::DEFAULT_MODEL;

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_TOKENS: u32 = 1000;

/// Immutable configuration resolved once at startup and passed into the
/// client and tracer constructors. Business logic never reads the
/// environment directly.
pub struct Settings {
    pub openai_api_key: SecretString,
    pub openai_base_url: Option<String>,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub langfuse: Option<LangfuseConfig>,
    pub braintrust: Option<BraintrustConfig>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ForkfulError> {
        let openai_api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            ForkfulError::InvalidConfig(
                "OPENAI_API_KEY is not set; recipe generation needs an OpenAI API key"
                    .to_string(),
            )
        })?;

        Ok(Self {
            openai_api_key: SecretString::new(openai_api_key),
            openai_base_url: std::env::var("OPENAI_BASE_URL").ok(),
            model: DEFAULT_MODEL.to_string(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            langfuse: LangfuseConfig::from_env(),
            braintrust: BraintrustConfig::from_env(),
        })
    }
}
