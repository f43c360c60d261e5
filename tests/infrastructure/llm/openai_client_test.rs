use std::sync::Arc;
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use summarizer_agent::application::ports::{LlmClient, LlmClientError};
use summarizer_agent::infrastructure::llm::{MockLlmClient, OpenAiClient};

use crate::helpers::start_mock_server;

fn client(base_url: &str) -> OpenAiClient {
    OpenAiClient::new(
        "sk-test".to_string(),
        base_url,
        "gpt-4o-mini".to_string(),
        0.2,
        Duration::from_secs(5),
    )
    .unwrap()
}

#[tokio::test]
async fn given_successful_completion_when_completing_then_returns_first_choice() {
    let captured: Arc<Mutex<Option<(Option<String>, Value)>>> = Arc::new(Mutex::new(None));
    let sink = captured.clone();

    let app = Router::new().route(
        "/chat/completions",
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = sink.clone();
            async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(String::from);
                *sink.lock().await = Some((auth, body));
                Json(json!({
                    "choices": [
                        {"message": {"role": "assistant", "content": "Abstract: done"}},
                        {"message": {"role": "assistant", "content": "ignored"}}
                    ]
                }))
            }
        }),
    );
    let (base_url, shutdown) = start_mock_server(app).await;

    let content = client(&format!("{base_url}/")).complete("Summarize me").await;

    assert_eq!(content.unwrap(), "Abstract: done");
    let (auth, body) = captured.lock().await.take().unwrap();
    assert_eq!(auth.as_deref(), Some("Bearer sk-test"));
    assert_eq!(body["model"], "gpt-4o-mini");
    assert_eq!(body["messages"][0]["role"], "user");
    assert_eq!(body["messages"][0]["content"], "Summarize me");
    assert!((body["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);

    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_api_error_body_when_completing_then_surfaces_error_message() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async {
            (
                StatusCode::TOO_MANY_REQUESTS,
                Json(json!({"error": {"message": "Rate limit reached", "type": "requests"}})),
            )
        }),
    );
    let (base_url, shutdown) = start_mock_server(app).await;

    let err = client(&base_url).complete("x").await.unwrap_err();

    assert!(matches!(err, LlmClientError::ApiError(ref m) if m == "Rate limit reached"));
    assert_eq!(err.to_string(), "Rate limit reached");

    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_error_without_message_when_completing_then_uses_generic_message() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { (StatusCode::BAD_GATEWAY, "upstream exploded") }),
    );
    let (base_url, shutdown) = start_mock_server(app).await;

    let err = client(&base_url).complete("x").await.unwrap_err();

    assert_eq!(err.to_string(), "LLM summarize failed");

    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_malformed_json_when_completing_then_returns_invalid_response() {
    let app = Router::new().route("/chat/completions", post(|| async { "not json" }));
    let (base_url, shutdown) = start_mock_server(app).await;

    let err = client(&base_url).complete("x").await.unwrap_err();

    assert!(matches!(err, LlmClientError::InvalidResponse(_)));

    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_no_choices_when_completing_then_returns_empty_string() {
    let app = Router::new().route(
        "/chat/completions",
        post(|| async { Json(json!({"choices": []})) }),
    );
    let (base_url, shutdown) = start_mock_server(app).await;

    let content = client(&base_url).complete("x").await.unwrap();

    assert_eq!(content, "");

    shutdown.send(()).ok();
}

#[tokio::test]
async fn given_mock_client_when_completing_then_returns_structured_summary() {
    let content = MockLlmClient.complete("anything").await.unwrap();

    assert!(content.contains("Abstract"));
    assert!(content.lines().any(|l| l.trim_start().starts_with('-')));
}
