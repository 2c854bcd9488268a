//! Integration tests for the LLM and feedback relay endpoints.
//!
//! Covers:
//! - Prompt forwarding and error taxonomy for /analyze
//! - Email composition and error taxonomy for /feedback
//! - CORS pre-flight, method and path fallbacks

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{read_body, TestHarness, TEST_FEEDBACK_TO};
use serde_json::json;
use server_core::kernel::test_dependencies::{MockAI, MockMailer};
use tower::ServiceExt;

// ============================================================================
// POST /analyze
// ============================================================================

#[tokio::test]
async fn analyze_returns_provider_text() {
    let harness = TestHarness::with_mocks(
        Some(MockAI::new().with_response("Общая оценка: всё хорошо.")),
        None,
    );

    let (status, body) = harness
        .post_json("/analyze", json!({ "prompt": "Анализ партнёра" }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "response": "Общая оценка: всё хорошо." }));
    assert_eq!(harness.ai().last_prompt().as_deref(), Some("Анализ партнёра"));
}

#[tokio::test]
async fn analyze_forwards_prompt_verbatim() {
    let harness = TestHarness::new();
    let prompt = "  line one\n\nline two  ";

    let (status, _) = harness.post_json("/analyze", json!({ "prompt": prompt })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(harness.ai().calls(), vec![prompt.to_string()]);
}

#[tokio::test]
async fn analyze_is_also_served_under_api_prefix() {
    let harness = TestHarness::new();

    let (status, body) = harness.post_json("/api/analyze", json!({ "prompt": "hi" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["response"], "Mock AI response");
}

#[tokio::test]
async fn analyze_requires_prompt() {
    let harness = TestHarness::new();

    for payload in [json!({}), json!({ "prompt": "" }), json!({ "prompt": null })] {
        let (status, body) = harness.post_json("/analyze", payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Prompt is required" }));
    }

    assert_eq!(harness.ai().call_count(), 0);
}

#[tokio::test]
async fn analyze_empty_body_is_missing_prompt() {
    let harness = TestHarness::new();

    let (status, body) = harness.post_raw("/analyze", "").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Prompt is required");
}

#[tokio::test]
async fn analyze_malformed_body_is_internal_error() {
    let harness = TestHarness::new();

    let (status, body) = harness.post_raw("/analyze", "{\"prompt\": ").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!body["error"].as_str().unwrap().is_empty());
    assert_eq!(harness.ai().call_count(), 0);
}

#[tokio::test]
async fn analyze_without_provider_names_both_credentials() {
    let harness = TestHarness::unconfigured();

    let (status, body) = harness.post_json("/analyze", json!({ "prompt": "hi" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body["error"],
        "No API key configured. Set GROQ_API_KEY or OPENAI_API_KEY"
    );
}

#[tokio::test]
async fn analyze_checks_prompt_before_credentials() {
    let harness = TestHarness::unconfigured();

    let (status, _) = harness.post_json("/analyze", json!({})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn analyze_propagates_provider_message() {
    let harness = TestHarness::with_mocks(Some(MockAI::new().failing("Rate limit reached")), None);

    let (status, body) = harness.post_json("/analyze", json!({ "prompt": "hi" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Rate limit reached" }));
}

// ============================================================================
// POST /feedback
// ============================================================================

#[tokio::test]
async fn feedback_sends_trimmed_text_to_fixed_recipient() {
    let harness = TestHarness::new();

    let (status, body) = harness
        .post_json("/feedback", json!({ "text": "  Отличный сервис!  " }))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true, "id": "mock-email-id" }));

    let sent = harness.mailer().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec![TEST_FEEDBACK_TO.to_string()]);
    assert_eq!(sent[0].subject, "Обратная связь — Cold Format");
    assert_eq!(sent[0].text, "Отличный сервис!");
}

#[tokio::test]
async fn feedback_stringifies_numeric_text() {
    let harness = TestHarness::new();

    let (status, _) = harness.post_json("/feedback", json!({ "text": 123 })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(harness.mailer().sent()[0].text, "123");
}

#[tokio::test]
async fn feedback_without_text_sends_placeholder() {
    let harness = TestHarness::new();

    let (status, _) = harness.post_raw("/feedback", "").await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = harness.post_json("/feedback", json!({ "text": "   " })).await;
    assert_eq!(status, StatusCode::OK);

    let texts: Vec<String> = harness.mailer().sent().into_iter().map(|e| e.text).collect();
    assert_eq!(texts, vec!["(пусто)", "(пусто)"]);
}

#[tokio::test]
async fn feedback_omits_missing_id() {
    let harness = TestHarness::with_mocks(None, Some(MockMailer::new().with_id(None)));

    let (status, body) = harness.post_json("/feedback", json!({ "text": "hi" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));
}

#[tokio::test]
async fn feedback_without_credential() {
    let harness = TestHarness::unconfigured();

    let (status, body) = harness.post_json("/feedback", json!({ "text": "hi" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "RESEND_API_KEY not set" }));
}

#[tokio::test]
async fn feedback_propagates_provider_message() {
    let harness = TestHarness::with_mocks(
        None,
        Some(MockMailer::new().failing("The `to` field must be a valid email")),
    );

    let (status, body) = harness.post_json("/feedback", json!({ "text": "hi" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "The `to` field must be a valid email");
}

// ============================================================================
// CORS, methods and fallbacks
// ============================================================================

#[tokio::test]
async fn preflight_is_empty_no_content_with_cors_headers() {
    let harness = TestHarness::new();

    for uri in ["/analyze", "/feedback", "/api/analyze"] {
        let response = harness
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(uri)
                    .header("origin", "https://coldformat.example")
                    .header("access-control-request-method", "POST")
                    .header("access-control-request-headers", "content-type")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{}", uri);
        let headers = response.headers().clone();
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        let methods = headers
            .get("access-control-allow-methods")
            .unwrap()
            .to_str()
            .unwrap()
            .to_string();
        assert!(methods.contains("POST"));
        assert!(methods.contains("OPTIONS"));
        assert!(headers
            .get("access-control-allow-headers")
            .unwrap()
            .to_str()
            .unwrap()
            .contains("content-type"));
        assert!(read_body(response).await.is_empty());
    }
}

#[tokio::test]
async fn bare_options_is_no_content() {
    let harness = TestHarness::unconfigured();

    for uri in ["/analyze", "/feedback", "/does-not-exist"] {
        let response = harness.request(Method::OPTIONS, uri, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT, "{}", uri);
        assert!(read_body(response).await.is_empty());
    }
}

#[tokio::test]
async fn cross_origin_post_allows_any_origin() {
    let harness = TestHarness::new();

    let response = harness
        .app
        .clone()
        .oneshot(
            Request::post("/analyze")
                .header("origin", "https://anywhere.example")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"prompt":"hi"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers().get("access-control-allow-origin").unwrap(), "*");
    assert_eq!(
        response.headers().get("access-control-allow-methods").unwrap(),
        "POST, OPTIONS"
    );
    assert_eq!(
        response.headers().get("access-control-allow-headers").unwrap(),
        "Content-Type"
    );
}

#[tokio::test]
async fn error_replies_carry_cors_headers() {
    let harness = TestHarness::unconfigured();

    for (uri, body) in [("/analyze", r#"{"prompt":"hi"}"#), ("/feedback", "{}"), ("/analyze", "{}")] {
        let response = harness
            .app
            .clone()
            .oneshot(
                Request::post(uri)
                    .header("origin", "https://anywhere.example")
                    .header("content-type", "application/json")
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response.status().is_client_error() || response.status().is_server_error());
        let headers = response.headers();
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(headers.get("access-control-allow-methods").unwrap(), "POST, OPTIONS");
        assert_eq!(headers.get("access-control-allow-headers").unwrap(), "Content-Type");
    }
}

#[tokio::test]
async fn other_methods_are_not_found() {
    let harness = TestHarness::new();

    for (method, uri) in [
        (Method::GET, "/analyze"),
        (Method::PUT, "/feedback"),
        (Method::DELETE, "/api/analyze"),
    ] {
        let response = harness.request(method, uri, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = serde_json::from_slice(&read_body(response).await).unwrap();
        assert_eq!(body, json!({ "error": "Not found" }));
    }

    assert_eq!(harness.ai().call_count(), 0);
    assert!(harness.mailer().sent().is_empty());
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let harness = TestHarness::new();

    let (status, body) = harness.post_json("/api/unknown", json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}
