use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::{IngestionBatch, LangfuseConfig};

#[derive(Debug, Error)]
pub enum LangfuseError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("http error: {status}")]
    Http { status: StatusCode, body: String },
}

#[derive(Clone)]
pub struct LangfuseClient {
    client: Client,
    host: String,
    public_key: String,
    secret_key: SecretString,
}

impl LangfuseClient {
    pub fn new(config: &LangfuseConfig) -> Self {
        Self {
            client: Client::new(),
            host: config.host.trim_end_matches('/').to_string(),
            public_key: config.public_key.clone(),
            secret_key: config.secret_key.clone(),
        }
    }

    /// Send one ingestion batch. A single attempt; the caller downgrades any
    /// error to advisory trace info.
    pub async fn ingest(&self, batch: &IngestionBatch) -> Result<(), LangfuseError> {
        let url = format!("{}/api/public/ingestion", self.host);
        let response = self
            .client
            .post(url)
            .basic_auth(&self.public_key, Some(self.secret_key.expose_secret()))
            .json(batch)
            .send()
            .await?;

        // The ingestion endpoint answers 207 for accepted batches.
        if response.status().is_success() {
            return Ok(());
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(LangfuseError::Http { status, body })
    }
}
