//! Local stand-ins for the LLM and email provider HTTP APIs.

#![allow(dead_code)]

use axum::{extract::State, http::HeaderMap, http::StatusCode, routing::post, Json, Router};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

/// A captured upstream request: authorization header and JSON body.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub authorization: Option<String>,
    pub body: Value,
}

/// Mock upstream that answers every POST with a fixed status and body.
#[derive(Clone)]
pub struct MockUpstream {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    /// Bind to an ephemeral port and serve `path`.
    pub async fn spawn(path: &str, status: StatusCode, reply: Value) -> Self {
        let captured = Arc::new(Mutex::new(Vec::new()));
        let state = (captured.clone(), status, reply);

        let router = Router::new()
            .route(
                path,
                post(
                    |State((captured, status, reply)): State<(
                        Arc<Mutex<Vec<CapturedRequest>>>,
                        StatusCode,
                        Value,
                    )>,
                     headers: HeaderMap,
                     Json(body): Json<Value>| async move {
                        captured.lock().unwrap().push(CapturedRequest {
                            authorization: headers
                                .get("authorization")
                                .and_then(|v| v.to_str().ok())
                                .map(String::from),
                            body,
                        });
                        (status, Json(reply))
                    },
                ),
            )
            .with_state(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        Self {
            base_url: format!("http://{}", addr),
            captured,
        }
    }

    /// OpenAI-compatible `/chat/completions` returning `content`.
    pub async fn chat_completion(content: &str) -> Self {
        Self::spawn(
            "/chat/completions",
            StatusCode::OK,
            json!({
                "choices": [{ "message": { "role": "assistant", "content": content } }],
                "usage": { "prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15 }
            }),
        )
        .await
    }

    /// OpenAI-compatible `/chat/completions` reporting an error.
    pub async fn chat_completion_error(status: StatusCode, message: &str) -> Self {
        Self::spawn(
            "/chat/completions",
            status,
            json!({ "error": { "message": message, "type": "invalid_request_error" } }),
        )
        .await
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}
