use serde::{Deserialize, Serialize};

use crate::GenerationResult;

/// Identifiers an observability backend hands back for display. Attached to a
/// result for the current invocation only, never persisted locally.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct TraceInfo {
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl TraceInfo {
    pub fn recorded(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Self::default()
        }
    }

    pub fn failed(method: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            error: Some(error.into()),
            ..Self::default()
        }
    }
}

/// A best-effort exporter of generation results to one observability backend.
///
/// `report` must never fail out of the call: adapters convert internal errors
/// (network, bad response) into `TraceInfo::error` so the CLI can display
/// them without aborting the main flow.
#[async_trait::async_trait]
pub trait Tracer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn report(&self, ingredients: &[String], result: &GenerationResult) -> TraceInfo;

    /// Flush pending writes before exit. Returns a viewable URL when the
    /// backend has one (e.g. an experiment page).
    async fn finish(&self) -> Option<String> {
        None
    }
}
