use async_openai::error::OpenAIError;
use httpmock::prelude::*;
use serde_json::{json, Value};

use abstractgen::{
    error::{AgentError, AppError},
    model::CompletionRequest,
    prompt::{prompt_for_abstract, prompt_for_field},
    AbstractGenerator,
    CompletionProvider,
    Config,
    OpenAIAgent
};

const MODEL: &str = "gpt-3.5-turbo-instruct";

fn agent_for(server: &MockServer) -> OpenAIAgent {
    let config = Config::new("sk-test", MODEL, Some(server.url("/v1").as_str()));
    OpenAIAgent::from_config(&config)
}

fn completion_body(text: &str, finish_reason: &str) -> Value {
    json!({
        "id": "cmpl-test",
        "object": "text_completion",
        "created": 1700000000,
        "model": MODEL,
        "choices": [
            { "text": text, "index": 0, "logprobs": null, "finish_reason": finish_reason }
        ],
        "usage": { "prompt_tokens": 20, "completion_tokens": 5, "total_tokens": 25 }
    })
}

#[tokio::test]
async fn test_request_carries_prompt_cap_and_stop() {
    let server = MockServer::start_async().await;
    let expected = json!({
        "model": MODEL,
        "prompt": prompt_for_field("optics"),
        "max_tokens": 40,
        "stop": "\n"
    });
    let mock = server.mock_async(|when, then| {
        when.method(POST)
            .path("/v1/completions")
            .header("authorization", "Bearer sk-test")
            .json_body_partial(expected.to_string());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion_body(" Lenses", "stop"));
    }).await;

    let agent = agent_for(&server);
    let request = CompletionRequest::new(prompt_for_field("optics"), 40, "\n");
    let completion = agent.complete(&request).await.unwrap();

    mock.assert_async().await;
    assert_eq!(completion.alternatives.len(), 1);
    assert_eq!(completion.alternatives[0].text, " Lenses");
    assert!(!completion.alternatives[0].truncated);
}

#[tokio::test]
async fn test_length_finish_marks_truncated() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(POST).path("/v1/completions");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion_body("We examine", "length"));
    }).await;

    let agent = agent_for(&server);
    let request = CompletionRequest::new("prompt".to_string(), 400, "\n");
    let completion = agent.complete(&request).await.unwrap();
    assert!(completion.alternatives[0].truncated);
}

#[tokio::test]
async fn test_api_error_propagates() {
    let server = MockServer::start_async().await;
    server.mock_async(|when, then| {
        when.method(POST).path("/v1/completions");
        then.status(401)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "error": {
                    "message": "Incorrect API key provided",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "invalid_api_key"
                }
            }));
    }).await;

    let agent = agent_for(&server);
    let request = CompletionRequest::new("prompt".to_string(), 40, "\n");
    match agent.complete(&request).await {
        Err(AgentError::OpenAI(OpenAIError::ApiError(e))) => {
            assert_eq!(e.message, "Incorrect API key provided");
        }
        other => panic!("expected api error, got {:?}", other)
    }
}

#[tokio::test]
async fn test_generator_against_service() {
    let field = "sociolinguistics of queer communities";
    let server = MockServer::start_async().await;
    let title_mock = server.mock_async(|when, then| {
        when.method(POST)
            .path("/v1/completions")
            .json_body_partial(json!({ "prompt": prompt_for_field(field), "max_tokens": 40 }).to_string());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion_body(" On Queer Phonology", "stop"));
    }).await;
    let abstract_mock = server.mock_async(|when, then| {
        when.method(POST)
            .path("/v1/completions")
            .json_body_partial(json!({
                "prompt": prompt_for_abstract(field, "On Queer Phonology"),
                "max_tokens": 400,
                "stop": "\n"
            }).to_string());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(completion_body("We examine...", "stop"));
    }).await;

    let generator = AbstractGenerator::new(agent_for(&server));
    let mut out = Vec::new();
    generator.generate_to(field, &mut out).await.unwrap();

    title_mock.assert_async().await;
    abstract_mock.assert_async().await;
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Here's your abstract!\n\nOn Queer Phonology \nAbstract:\nWe examine...\n"
    );
}

#[tokio::test]
async fn test_failed_title_call_prints_nothing() {
    let server = MockServer::start_async().await;
    let mock = server.mock_async(|when, then| {
        when.method(POST).path("/v1/completions");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(json!({
                "error": {
                    "message": "The model does not exist",
                    "type": "invalid_request_error",
                    "param": "model",
                    "code": "model_not_found"
                }
            }));
    }).await;

    let generator = AbstractGenerator::new(agent_for(&server));
    let mut out = Vec::new();
    let err = generator.generate_to("optics", &mut out).await.unwrap_err();

    assert!(matches!(err, AppError::Agent(AgentError::OpenAI(_))));
    assert!(out.is_empty());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_unreachable_service() {
    let config = Config::new("sk-test", MODEL, Some("http://127.0.0.1:1/v1"));
    let agent = OpenAIAgent::from_config(&config);
    let request = CompletionRequest::new("prompt".to_string(), 40, "\n");
    let err = agent.complete(&request).await.unwrap_err();
    assert!(matches!(err, AgentError::OpenAI(_)));
}
