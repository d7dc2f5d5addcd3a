mod error;
mod parse;
mod pricing;
mod score;
mod tracer;
mod types;

pub use error::ForkfulError;
pub use parse::recipe_from_text;
pub use pricing::{cost_usd, model_pricing, ModelPricing};
pub use score::{ingredient_usage, recipe_completeness};
pub use tracer::{TraceInfo, Tracer};
pub use types::{FailureMetadata, GenerationMetadata, GenerationResult, Recipe};
