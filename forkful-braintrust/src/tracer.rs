use chrono::Utc;
use serde_json::{json, Value};
use tokio::sync::Mutex;
use uuid::Uuid;

use forkful_core::{ingredient_usage, recipe_completeness, GenerationResult, TraceInfo, Tracer};

use crate::{BraintrustClient, BraintrustConfig, BraintrustError, Experiment};

const METHOD: &str = "braintrust-experiment";

/// Logs one scored record per generation into a Braintrust experiment.
///
/// The experiment is registered on first use so that a session with no
/// generations leaves nothing behind.
pub struct BraintrustTracer {
    client: BraintrustClient,
    config: BraintrustConfig,
    experiment_name: Option<String>,
    generation_params: Option<(f32, u32)>,
    experiment: Mutex<Option<Experiment>>,
}

impl BraintrustTracer {
    pub fn new(config: BraintrustConfig) -> Self {
        Self {
            client: BraintrustClient::new(&config),
            config,
            experiment_name: None,
            generation_params: None,
            experiment: Mutex::new(None),
        }
    }

    pub fn with_experiment_name(mut self, name: impl Into<String>) -> Self {
        self.experiment_name = Some(name.into());
        self
    }

    /// Record the fixed generation parameters alongside each record's input.
    pub fn with_generation_params(mut self, temperature: f32, max_tokens: u32) -> Self {
        self.generation_params = Some((temperature, max_tokens));
        self
    }

    async fn ensure_experiment(&self) -> Result<Experiment, BraintrustError> {
        let mut guard = self.experiment.lock().await;
        if let Some(experiment) = guard.as_ref() {
            return Ok(experiment.clone());
        }
        let name = self
            .experiment_name
            .clone()
            .unwrap_or_else(|| format!("recipe-generation-{}", Utc::now().timestamp()));
        let experiment = self
            .client
            .register_experiment(&self.config.project, &name)
            .await?;
        *guard = Some(experiment.clone());
        Ok(experiment)
    }

    fn build_event(
        &self,
        record_id: Uuid,
        ingredients: &[String],
        result: &GenerationResult,
    ) -> Value {
        let mut input = json!({
            "ingredients": ingredients,
            "model": result.model(),
        });
        if let Some((temperature, max_tokens)) = self.generation_params {
            input["temperature"] = json!(temperature);
            input["max_tokens"] = json!(max_tokens);
        }

        match result {
            GenerationResult::Success {
                recipe,
                metadata,
                raw_text,
            } => json!({
                "id": record_id,
                "input": input,
                "output": {"recipe": recipe, "raw_response": raw_text},
                "scores": {
                    "success": 1.0,
                    "ingredients_used": ingredient_usage(ingredients, &recipe.ingredients),
                    "recipe_completeness": recipe_completeness(recipe),
                },
                "metadata": {
                    "model": metadata.model,
                    "prompt_tokens": metadata.prompt_tokens,
                    "completion_tokens": metadata.completion_tokens,
                    "total_tokens": metadata.total_tokens,
                    "latency": metadata.latency_seconds,
                    "cost": metadata.cost_usd,
                    "ingredients_count": ingredients.len(),
                    "recipe_name": recipe.name,
                    "servings": recipe.servings,
                    "cooking_time": recipe.cooking_time,
                    "instructions_count": recipe.instructions.len(),
                },
            }),
            GenerationResult::Failure { message, metadata } => json!({
                "id": record_id,
                "input": input,
                "output": {"error": message},
                "scores": {"success": 0.0},
                "metadata": {
                    "error": true,
                    "model": metadata.model,
                    "latency": metadata.latency_seconds,
                    "ingredients_count": ingredients.len(),
                },
            }),
        }
    }
}

#[async_trait::async_trait]
impl Tracer for BraintrustTracer {
    fn name(&self) -> &'static str {
        "braintrust"
    }

    async fn report(&self, ingredients: &[String], result: &GenerationResult) -> TraceInfo {
        let experiment = match self.ensure_experiment().await {
            Ok(experiment) => experiment,
            Err(err) => {
                tracing::warn!(error = %err, "braintrust experiment registration failed");
                return TraceInfo::failed(METHOD, err.to_string());
            }
        };

        let record_id = Uuid::new_v4();
        let event = self.build_event(record_id, ingredients, result);
        match self.client.insert_events(&experiment.id, &[event]).await {
            Ok(()) => TraceInfo {
                method: METHOD.to_string(),
                trace_id: Some(record_id.to_string()),
                observation_id: None,
                error: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "braintrust insert failed");
                TraceInfo::failed(METHOD, err.to_string())
            }
        }
    }

    async fn finish(&self) -> Option<String> {
        let guard = self.experiment.lock().await;
        guard.as_ref().map(|experiment| {
            format!(
                "{}/app/{}/experiments/{}",
                self.config.app_url.trim_end_matches('/'),
                self.config.project,
                experiment.name
            )
        })
    }
}
