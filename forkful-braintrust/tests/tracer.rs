use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

use forkful_core::{
    FailureMetadata, GenerationMetadata, GenerationResult, Recipe, Tracer,
};
use forkful_braintrust::{BraintrustConfig, BraintrustTracer};

fn config_for(server: &MockServer) -> BraintrustConfig {
    BraintrustConfig::new(SecretString::new("bt-key".to_string()))
        .with_api_url(server.uri())
        .with_app_url("https://www.braintrust.dev")
        .with_project("recipe-bot")
}

fn success_result() -> GenerationResult {
    GenerationResult::Success {
        recipe: Recipe {
            name: "Chicken and Rice".to_string(),
            ingredients: vec![
                "1 lb chicken breast".to_string(),
                "2 cups cooked rice".to_string(),
            ],
            instructions: vec!["Cook chicken.".to_string(), "Add rice.".to_string()],
            cooking_time: "30 minutes".to_string(),
            servings: 4,
        },
        metadata: GenerationMetadata {
            model: "gpt-4o-mini".to_string(),
            input_ingredients: vec!["chicken".to_string(), "rice".to_string()],
            dietary_requirements: None,
            prompt_tokens: 90,
            completion_tokens: 160,
            total_tokens: 250,
            latency_seconds: 1.1,
            cost_usd: 0.0001095,
        },
        raw_text: "{}".to_string(),
    }
}

async fn mount_experiment(server: &MockServer) {
    Mock::given(method("POST"))
        .and(path("/v1/experiment"))
        .and(header("authorization", "Bearer bt-key"))
        .and(body_partial_json(json!({"project_name": "recipe-bot"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "exp-123",
            "name": "recipe-generation-1"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn report_logs_scored_record() {
    let server = MockServer::start().await;
    mount_experiment(&server).await;
    Mock::given(method("POST"))
        .and(path("/v1/experiment/exp-123/insert"))
        .and(body_partial_json(json!({
            "events": [{
                "scores": {
                    "success": 1.0,
                    "ingredients_used": 1.0,
                    "recipe_completeness": 1.0
                },
                "metadata": {
                    "recipe_name": "Chicken and Rice",
                    "instructions_count": 2,
                    "total_tokens": 250
                }
            }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tracer = BraintrustTracer::new(config_for(&server)).with_generation_params(0.7, 1000);
    let ingredients = vec!["chicken".to_string(), "rice".to_string()];
    let info = tracer.report(&ingredients, &success_result()).await;

    assert_eq!(info.method, "braintrust-experiment");
    assert!(info.trace_id.is_some());
    assert!(info.error.is_none());

    let url = tracer.finish().await.expect("experiment url");
    assert_eq!(
        url,
        "https://www.braintrust.dev/app/recipe-bot/experiments/recipe-generation-1"
    );
}

#[tokio::test]
async fn failure_is_logged_with_zero_success_score() {
    let server = MockServer::start().await;
    mount_experiment(&server).await;
    Mock::given(method("POST"))
        .and(path_regex(r"^/v1/experiment/.+/insert$"))
        .and(body_partial_json(json!({
            "events": [{
                "output": {"error": "timed out"},
                "scores": {"success": 0.0},
                "metadata": {"error": true}
            }]
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let result = GenerationResult::Failure {
        message: "timed out".to_string(),
        metadata: FailureMetadata {
            model: "gpt-4o-mini".to_string(),
            input_ingredients: vec!["chicken".to_string()],
            latency_seconds: 60.0,
        },
    };

    let tracer = BraintrustTracer::new(config_for(&server));
    let info = tracer.report(&["chicken".to_string()], &result).await;
    assert!(info.error.is_none());
}

#[tokio::test]
async fn experiment_is_registered_once_across_reports() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/experiment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "exp-once",
            "name": "once"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/experiment/exp-once/insert"))
        .respond_with(ResponseTemplate::new(200))
        .expect(2)
        .mount(&server)
        .await;

    let tracer = BraintrustTracer::new(config_for(&server));
    let ingredients = vec!["chicken".to_string()];
    tracer.report(&ingredients, &success_result()).await;
    tracer.report(&ingredients, &success_result()).await;
}

#[tokio::test]
async fn backend_error_downgrades_to_trace_info() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/experiment"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let tracer = BraintrustTracer::new(config_for(&server));
    let info = tracer.report(&["chicken".to_string()], &success_result()).await;

    assert!(info.error.is_some());
    assert!(tracer.finish().await.is_none());
}
