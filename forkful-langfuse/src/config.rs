use secrecy::SecretString;

pub const DEFAULT_LANGFUSE_HOST: &str = "https://cloud.langfuse.com";

#[derive(Clone, Debug)]
pub struct LangfuseConfig {
    pub public_key: String,
    pub secret_key: SecretString,
    pub host: String,
}

impl LangfuseConfig {
    pub fn new(public_key: impl Into<String>, secret_key: SecretString) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key,
            host: DEFAULT_LANGFUSE_HOST.to_string(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Read credentials from the environment. `None` when either key is
    /// absent, which disables the adapter.
    pub fn from_env() -> Option<Self> {
        let public_key = std::env::var("LANGFUSE_PUBLIC_KEY").ok()?;
        let secret_key = std::env::var("LANGFUSE_SECRET_KEY").ok()?;
        let host = std::env::var("LANGFUSE_HOST")
            .unwrap_or_else(|_| DEFAULT_LANGFUSE_HOST.to_string());
        Some(Self {
            public_key,
            secret_key: SecretString::new(secret_key),
            host,
        })
    }
}
