use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

/// Envelope for one event in an ingestion batch.
#[derive(Serialize, Debug, Clone)]
pub struct IngestionEvent {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub body: Value,
}

impl IngestionEvent {
    pub fn trace_create(body: Value) -> Self {
        Self::new("trace-create", body)
    }

    pub fn generation_create(body: Value) -> Self {
        Self::new("generation-create", body)
    }

    fn new(event_type: &str, body: Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            event_type: event_type.to_string(),
            body,
        }
    }
}

#[derive(Serialize, Debug, Clone)]
pub struct IngestionBatch {
    pub batch: Vec<IngestionEvent>,
}
