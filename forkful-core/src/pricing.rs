//! Fixed per-model pricing for cost accounting.

/// Per-token USD prices for one model.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelPricing {
    pub input_per_token: f64,
    pub output_per_token: f64,
}

// Published per-million-token rates, stored per token.
const PRICING: &[(&str, ModelPricing)] = &[
    (
        "gpt-4o-mini",
        ModelPricing {
            input_per_token: 0.15 / 1_000_000.0,
            output_per_token: 0.60 / 1_000_000.0,
        },
    ),
    (
        "gpt-4o",
        ModelPricing {
            input_per_token: 2.50 / 1_000_000.0,
            output_per_token: 10.00 / 1_000_000.0,
        },
    ),
    (
        "gpt-4.1-mini",
        ModelPricing {
            input_per_token: 0.40 / 1_000_000.0,
            output_per_token: 1.60 / 1_000_000.0,
        },
    ),
];

pub fn model_pricing(model: &str) -> Option<ModelPricing> {
    PRICING
        .iter()
        .find(|(name, _)| *name == model)
        .map(|(_, pricing)| *pricing)
}

/// Cost of one call in USD. Unknown models price at zero with a warning
/// rather than failing the call.
pub fn cost_usd(model: &str, prompt_tokens: u32, completion_tokens: u32) -> f64 {
    match model_pricing(model) {
        Some(pricing) => {
            f64::from(prompt_tokens) * pricing.input_per_token
                + f64::from(completion_tokens) * pricing.output_per_token
        }
        None => {
            tracing::warn!(model, "no pricing entry for model, reporting cost as 0");
            0.0
        }
    }
}
