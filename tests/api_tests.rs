use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use legalgenius_backend::config::{Config, LlmConfig, SystemConfig};
use legalgenius_backend::llm::{Message, StatelessLlm};
use legalgenius_backend::relay::FALLBACK_TEXT;
use legalgenius_backend::routes::create_routes;
use legalgenius_backend::state::AppState;

struct FakeLlm {
    reply: Result<String, String>,
    calls: AtomicUsize,
}

impl FakeLlm {
    fn replying(text: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    fn failing(message: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: Err(message.to_string()),
            calls: AtomicUsize::new(0),
        })
    }
}

#[async_trait]
impl StatelessLlm for FakeLlm {
    async fn chat_completion(
        &self,
        _messages: &[Message],
        _system: Option<&str>,
    ) -> Result<String, anyhow::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(anyhow::anyhow!("{}", message)),
        }
    }
}

fn test_config() -> Config {
    Config {
        system_config: SystemConfig::default(),
        llm_config: LlmConfig {
            provider: "openai_compatible_llm".to_string(),
            base_url: "http://localhost:9999/v1".to_string(),
            model: "llama3-8b-8192".to_string(),
            api_key_env: "LLM_API_KEY".to_string(),
            temperature: 1.0,
            timeout_secs: 5,
        },
    }
}

fn app_with(llm: Arc<FakeLlm>) -> Router {
    create_routes(AppState::with_llm(test_config(), llm))
}

fn chat_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/api/legal-chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn valid_query_returns_provider_text() {
    let llm = FakeLlm::replying("Section 378 IPC defines theft.");
    let response = app_with(llm)
        .oneshot(chat_request(
            json!({"query": "What is Section 378 IPC?", "language": "en"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"response": "Section 378 IPC defines theft."}));
}

#[tokio::test]
async fn language_defaults_to_english() {
    let llm = FakeLlm::replying("ok");
    let response = app_with(llm)
        .oneshot(chat_request(json!({"query": "What is an FIR?"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn empty_body_returns_query_required() {
    let llm = FakeLlm::replying("unused");
    let response = app_with(llm.clone())
        .oneshot(chat_request(json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Query is required"}));
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn whitespace_query_returns_query_required() {
    let llm = FakeLlm::replying("unused");
    let response = app_with(llm)
        .oneshot(chat_request(json!({"query": "   ", "language": "hi"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Query is required"}));
}

#[tokio::test]
async fn oversized_query_is_rejected() {
    let llm = FakeLlm::replying("unused");
    let long_query = "a".repeat(4001);
    let response = app_with(llm.clone())
        .oneshot(chat_request(json!({"query": long_query})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Query is too long"}));
    assert_eq!(llm.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn get_verb_returns_method_not_allowed() {
    let llm = FakeLlm::replying("unused");
    let response = app_with(llm)
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/legal-chat")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn upstream_failure_returns_502_with_fallback_text() {
    let llm = FakeLlm::failing("provider returned 503");
    let response = app_with(llm)
        .oneshot(chat_request(json!({"query": "What is Section 378 IPC?"})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = body_json(response).await;
    assert_eq!(body, json!({"error": FALLBACK_TEXT}));
}

#[tokio::test]
async fn repeated_requests_are_not_cached() {
    let llm = FakeLlm::replying("answer");
    let app = app_with(llm.clone());

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(chat_request(
                json!({"query": "What is Section 378 IPC?", "language": "en"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert!(body["response"].is_string());
    }

    assert_eq!(llm.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn health_check_reports_ok() {
    let llm = FakeLlm::replying("unused");
    let response = app_with(llm)
        .oneshot(
            Request::builder()
                .method(Method::GET)
                .uri("/api/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body, json!({"status": "ok"}));
}
