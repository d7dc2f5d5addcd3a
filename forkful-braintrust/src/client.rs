use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::BraintrustConfig;

#[derive(Debug, Error)]
pub enum BraintrustError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("http error: {status}")]
    Http { status: StatusCode, body: String },
}

#[derive(Clone, Debug, Deserialize)]
pub struct Experiment {
    pub id: String,
    pub name: String,
}

#[derive(Clone)]
pub struct BraintrustClient {
    client: Client,
    api_url: String,
    api_key: SecretString,
}

impl BraintrustClient {
    pub fn new(config: &BraintrustConfig) -> Self {
        Self {
            client: Client::new(),
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    pub async fn register_experiment(
        &self,
        project: &str,
        name: &str,
    ) -> Result<Experiment, BraintrustError> {
        let url = format!("{}/v1/experiment", self.api_url);
        let payload = json!({"project_name": project, "name": name});
        let response = self
            .client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;
        Self::check(response).await?.json().await.map_err(Into::into)
    }

    pub async fn insert_events(
        &self,
        experiment_id: &str,
        events: &[Value],
    ) -> Result<(), BraintrustError> {
        let url = format!("{}/v1/experiment/{}/insert", self.api_url, experiment_id);
        let payload = json!({"events": events});
        let response = self
            .client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&payload)
            .send()
            .await?;
        Self::check(response).await.map(|_| ())
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, BraintrustError> {
        if response.status().is_success() {
            return Ok(response);
        }
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        Err(BraintrustError::Http { status, body })
    }
}
