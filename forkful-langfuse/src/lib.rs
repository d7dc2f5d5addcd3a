//! Langfuse observability for forkful generations.
//!
//! One [`LangfuseTracer::report`] call records a trace with a single
//! `generation` observation via the public ingestion API. Backend failures
//! never propagate; they come back as `TraceInfo::error`.

mod client;
mod config;
mod events;
mod tracer;

pub use client::{LangfuseClient, LangfuseError};
pub use config::{LangfuseConfig, DEFAULT_LANGFUSE_HOST};
pub use events::{IngestionBatch, IngestionEvent};
pub use tracer::LangfuseTracer;
