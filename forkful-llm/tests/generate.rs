use httpmock::prelude::*;
use serde_json::json;

use forkful_llm::{GenerationResult, RecipeClient};

fn client_for(server: &MockServer) -> RecipeClient {
    RecipeClient::builder()
        .base_url(server.url(""))
        .expect("valid base url")
        .api_key("test-key")
        .build()
        .expect("client")
}

fn recipe_content() -> String {
    json!({
        "name": "Chicken Stir Fry",
        "ingredients": [
            "1 lb chicken breast",
            "2 cups cooked rice",
            "2 bell peppers",
            "3 tbsp soy sauce"
        ],
        "instructions": [
            "Slice the chicken and peppers.",
            "Stir-fry the chicken until cooked through.",
            "Add peppers and soy sauce, then serve over rice."
        ],
        "cooking_time": "25 minutes",
        "servings": 4
    })
    .to_string()
}

#[tokio::test]
async fn generate_maps_structured_response() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .header("authorization", "Bearer test-key")
            .json_body_partial(r#"{"model": "gpt-4o-mini"}"#);
        then.status(200).json_body(json!({
            "model": "gpt-4o-mini",
            "choices": [{
                "message": {"role": "assistant", "content": recipe_content()},
                "finish_reason": "stop"
            }],
            "usage": {"prompt_tokens": 120, "completion_tokens": 180, "total_tokens": 300}
        }));
    });

    let ingredients = vec![
        "chicken".to_string(),
        "rice".to_string(),
        "bell peppers".to_string(),
        "soy sauce".to_string(),
    ];
    let result = client_for(&server).generate(&ingredients, None).await;
    mock.assert();

    match result {
        GenerationResult::Success {
            recipe,
            metadata,
            raw_text,
        } => {
            assert_eq!(recipe.name, "Chicken Stir Fry");
            assert_eq!(recipe.servings, 4);
            assert_eq!(metadata.model, "gpt-4o-mini");
            assert_eq!(metadata.total_tokens, 300);
            assert_eq!(metadata.input_ingredients, ingredients);
            assert!(metadata.dietary_requirements.is_none());
            assert!(metadata.latency_seconds >= 0.0);
            // 120 prompt + 180 completion tokens at gpt-4o-mini rates.
            let expected = 120.0 * 0.15 / 1e6 + 180.0 * 0.60 / 1e6;
            assert!((metadata.cost_usd - expected).abs() < 1e-12);
            assert!(raw_text.contains("Chicken Stir Fry"));
        }
        GenerationResult::Failure { message, .. } => panic!("expected success, got: {message}"),
    }
}

#[tokio::test]
async fn generate_sends_schema_constrained_request() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/v1/chat/completions")
            .json_body_partial(
                r#"{"response_format": {"type": "json_schema", "json_schema": {"name": "recipe", "strict": true}}}"#,
            );
        then.status(200).json_body(json!({
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": recipe_content()}}],
            "usage": {"prompt_tokens": 1, "completion_tokens": 1, "total_tokens": 2}
        }));
    });

    let ingredients = vec!["tofu".to_string()];
    let dietary = vec!["vegan".to_string()];
    let result = client_for(&server)
        .generate(&ingredients, Some(&dietary))
        .await;
    mock.assert();

    match result {
        GenerationResult::Success { metadata, .. } => {
            assert_eq!(metadata.dietary_requirements, Some(dietary));
        }
        GenerationResult::Failure { message, .. } => panic!("expected success, got: {message}"),
    }
}

#[tokio::test]
async fn provider_error_becomes_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(429).json_body(json!({
            "error": {"message": "Rate limit reached", "type": "requests", "code": null}
        }));
    });

    let ingredients = vec!["chicken".to_string()];
    let result = client_for(&server).generate(&ingredients, None).await;

    match result {
        GenerationResult::Failure { message, metadata } => {
            assert!(message.contains("Rate limit reached"), "got: {message}");
            assert_eq!(metadata.model, "gpt-4o-mini");
            assert_eq!(metadata.input_ingredients, ingredients);
            assert!(metadata.latency_seconds >= 0.0);
        }
        GenerationResult::Success { .. } => panic!("expected failure"),
    }
}

#[tokio::test]
async fn schema_violation_becomes_failure() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path("/v1/chat/completions");
        then.status(200).json_body(json!({
            "model": "gpt-4o-mini",
            "choices": [{"message": {"role": "assistant", "content": "sorry, no recipe today"}}],
            "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
        }));
    });

    let ingredients = vec!["chicken".to_string()];
    let result = client_for(&server).generate(&ingredients, None).await;

    match result {
        GenerationResult::Failure { message, .. } => {
            assert!(message.contains("recipe schema"), "got: {message}");
        }
        GenerationResult::Success { .. } => panic!("expected failure"),
    }
}

#[test]
fn builder_requires_api_key() {
    assert!(RecipeClient::builder().build().is_err());
    assert!(RecipeClient::builder().base_url("not a url").is_err());
}
