use secrecy::SecretString;

pub const DEFAULT_API_URL: &str = "https://api.braintrust.dev";
pub const DEFAULT_APP_URL: &str = "https://www.braintrust.dev";

const DEFAULT_PROJECT: &str = "forkful";

#[derive(Clone, Debug)]
pub struct BraintrustConfig {
    pub api_key: SecretString,
    pub api_url: String,
    pub app_url: String,
    pub project: String,
}

impl BraintrustConfig {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            api_url: DEFAULT_API_URL.to_string(),
            app_url: DEFAULT_APP_URL.to_string(),
            project: DEFAULT_PROJECT.to_string(),
        }
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    pub fn with_app_url(mut self, app_url: impl Into<String>) -> Self {
        self.app_url = app_url.into();
        self
    }

    pub fn with_project(mut self, project: impl Into<String>) -> Self {
        self.project = project.into();
        self
    }

    /// Read the API key from the environment. `None` disables the adapter.
    pub fn from_env() -> Option<Self> {
        let api_key = std::env::var("BRAINTRUST_API_KEY").ok()?;
        Some(Self::new(SecretString::new(api_key)))
    }
}
