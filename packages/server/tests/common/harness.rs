//! Test harness driving the router in-process.
//!
//! Requests go through `tower::ServiceExt::oneshot`, so no port is bound for
//! the API itself; only mock upstream providers listen on localhost.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use serde_json::Value;
use server_core::kernel::test_dependencies::{MockAI, MockMailer};
use server_core::kernel::{BaseAI, BaseMailer, ServerDeps};
use server_core::server::build_app;
use std::sync::Arc;
use tower::ServiceExt;

pub const TEST_FEEDBACK_TO: &str = "owner@example.com";

/// Initialize tracing once; run with `RUST_LOG=debug cargo test -- --nocapture`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Router plus handles on the mocks it was built with.
pub struct TestHarness {
    pub app: Router,
    pub ai: Option<Arc<MockAI>>,
    pub mailer: Option<Arc<MockMailer>>,
}

impl TestHarness {
    /// Both providers configured with default mock behavior.
    pub fn new() -> Self {
        Self::with_mocks(Some(MockAI::new()), Some(MockMailer::new()))
    }

    /// No credentials configured at all.
    pub fn unconfigured() -> Self {
        Self::with_mocks(None, None)
    }

    pub fn with_mocks(ai: Option<MockAI>, mailer: Option<MockMailer>) -> Self {
        init_tracing();

        let ai = ai.map(Arc::new);
        let mailer = mailer.map(Arc::new);

        let deps = ServerDeps::new(
            ai.clone().map(|a| a as Arc<dyn BaseAI>),
            mailer.clone().map(|m| m as Arc<dyn BaseMailer>),
            TEST_FEEDBACK_TO,
        );

        Self {
            app: build_app(deps),
            ai,
            mailer,
        }
    }

    pub fn ai(&self) -> &MockAI {
        self.ai.as_deref().expect("harness built without AI")
    }

    pub fn mailer(&self) -> &MockMailer {
        self.mailer.as_deref().expect("harness built without mailer")
    }

    pub async fn request(&self, method: Method, uri: &str, body: Body) -> Response<Body> {
        self.app
            .clone()
            .oneshot(Request::builder().method(method).uri(uri).body(body).unwrap())
            .await
            .unwrap()
    }

    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        send_json(&self.app, uri, body).await
    }

    pub async fn post_raw(&self, uri: &str, body: &'static str) -> (StatusCode, Value) {
        let response = self.request(Method::POST, uri, Body::from(body)).await;
        let status = response.status();
        (status, read_json(response).await)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self.request(Method::GET, uri, Body::empty()).await;
        let status = response.status();
        (status, read_json(response).await)
    }
}

/// POST a JSON body to any router and decode the JSON reply.
pub async fn send_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::post(uri)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    (status, read_json(response).await)
}

pub async fn read_body(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn read_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&read_body(response).await).unwrap()
}
