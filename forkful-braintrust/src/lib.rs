//! Braintrust experiment logging for forkful generations.
//!
//! Each [`BraintrustTracer::report`] call appends one scored record to a
//! lazily registered experiment; [`finish`](forkful_core::Tracer::finish)
//! yields the experiment's viewer URL. Backend failures never propagate.

mod client;
mod config;
mod tracer;

pub use client::{BraintrustClient, BraintrustError, Experiment};
pub use config::{BraintrustConfig, DEFAULT_API_URL, DEFAULT_APP_URL};
pub use tracer::BraintrustTracer;
