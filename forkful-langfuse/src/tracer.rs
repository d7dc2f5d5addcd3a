use chrono::{Duration as ChronoDuration, Utc};
use serde_json::json;
use uuid::Uuid;

use forkful_core::{GenerationResult, TraceInfo, Tracer};
use forkful_prompt::{build_user_prompt, recipe_system_prompt};

use crate::{IngestionBatch, IngestionEvent, LangfuseClient, LangfuseConfig};

const METHOD: &str = "langfuse-generation";
const GENERATION_NAME: &str = "recipe_llm_call";

/// Records one generation observation per call under a fresh trace.
pub struct LangfuseTracer {
    client: LangfuseClient,
}

impl LangfuseTracer {
    pub fn new(config: LangfuseConfig) -> Self {
        Self {
            client: LangfuseClient::new(&config),
        }
    }

    fn build_batch(
        trace_id: Uuid,
        observation_id: Uuid,
        ingredients: &[String],
        result: &GenerationResult,
    ) -> IngestionBatch {
        let end_time = Utc::now();
        let latency_ms = (result.latency_seconds() * 1000.0) as i64;
        let start_time = end_time - ChronoDuration::milliseconds(latency_ms);

        let dietary = match result {
            GenerationResult::Success { metadata, .. } => metadata.dietary_requirements.clone(),
            GenerationResult::Failure { .. } => None,
        };
        let input_messages = json!([
            {"role": "system", "content": recipe_system_prompt()},
            {"role": "user", "content": build_user_prompt(ingredients, dietary.as_deref())},
        ]);

        let trace = IngestionEvent::trace_create(json!({
            "id": trace_id,
            "name": "recipe_generation",
            "timestamp": start_time,
            "input": {"ingredients": ingredients},
        }));

        let generation_body = match result {
            GenerationResult::Success {
                recipe,
                metadata,
                raw_text,
            } => json!({
                "id": observation_id,
                "traceId": trace_id,
                "name": GENERATION_NAME,
                "model": metadata.model,
                "startTime": start_time,
                "endTime": end_time,
                "input": input_messages,
                "output": raw_text,
                "usageDetails": {
                    "input": metadata.prompt_tokens,
                    "output": metadata.completion_tokens,
                    "total": metadata.total_tokens,
                },
                "costDetails": {"total": metadata.cost_usd},
                "metadata": {
                    "ingredients": ingredients,
                    "dietary_requirements": metadata.dietary_requirements,
                    "latency": metadata.latency_seconds,
                    "recipe_name": recipe.name,
                    "servings": recipe.servings,
                    "cooking_time": recipe.cooking_time,
                },
            }),
            GenerationResult::Failure { message, metadata } => json!({
                "id": observation_id,
                "traceId": trace_id,
                "name": GENERATION_NAME,
                "model": metadata.model,
                "startTime": start_time,
                "endTime": end_time,
                "input": input_messages,
                "output": {"error": message},
                "level": "ERROR",
                "statusMessage": message,
                "metadata": {
                    "ingredients": ingredients,
                    "error": true,
                    "latency": metadata.latency_seconds,
                },
            }),
        };

        IngestionBatch {
            batch: vec![trace, IngestionEvent::generation_create(generation_body)],
        }
    }
}

#[async_trait::async_trait]
impl Tracer for LangfuseTracer {
    fn name(&self) -> &'static str {
        "langfuse"
    }

    async fn report(&self, ingredients: &[String], result: &GenerationResult) -> TraceInfo {
        let trace_id = Uuid::new_v4();
        let observation_id = Uuid::new_v4();
        let batch = Self::build_batch(trace_id, observation_id, ingredients, result);

        match self.client.ingest(&batch).await {
            Ok(()) => TraceInfo {
                method: METHOD.to_string(),
                trace_id: Some(trace_id.to_string()),
                observation_id: Some(observation_id.to_string()),
                error: None,
            },
            Err(err) => {
                tracing::warn!(error = %err, "langfuse ingestion failed");
                TraceInfo::failed(METHOD, err.to_string())
            }
        }
    }
}
