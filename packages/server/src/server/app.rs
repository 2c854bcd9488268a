//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::Request,
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, CONTENT_LENGTH,
            CONTENT_TYPE,
        },
        HeaderValue, Method, StatusCode,
    },
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{
    analyze_handler, criteria_handler, feedback_handler, health_handler, no_content, not_found,
    score_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: Arc<ServerDeps>,
}

/// Normalize every OPTIONS response to an empty `204`.
///
/// CorsLayer answers pre-flights itself with `200`; callers of this API
/// expect `204` with no body, whatever the path.
async fn preflight_no_content(request: Request, next: Next) -> Response {
    let is_options = request.method() == Method::OPTIONS;
    let response = next.run(request).await;
    if !is_options {
        return response;
    }

    let (mut parts, _) = response.into_parts();
    parts.status = StatusCode::NO_CONTENT;
    parts.headers.remove(CONTENT_TYPE);
    parts.headers.remove(CONTENT_LENGTH);
    Response::from_parts(parts, Body::empty())
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/analyze",
            post(analyze_handler).options(no_content).fallback(not_found),
        )
        .route(
            "/feedback",
            post(feedback_handler).options(no_content).fallback(not_found),
        )
        .route(
            "/score",
            post(score_handler).options(no_content).fallback(not_found),
        )
        .route(
            "/criteria",
            get(criteria_handler).options(no_content).fallback(not_found),
        )
        .route("/health", get(health_handler).fallback(not_found))
}

/// Build the Axum application router
///
/// Routes are served both at the root and under `/api`.
pub fn build_app(deps: ServerDeps) -> Router {
    let app_state = AppState {
        deps: Arc::new(deps),
    };

    // CORS configuration - any origin may call the relay
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .merge(api_routes())
        .nest("/api", api_routes())
        .fallback(not_found)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(cors)
        // CorsLayer only sets these on pre-flights; every reply carries them
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, OPTIONS"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Content-Type"),
        ))
        .layer(middleware::from_fn(preflight_no_content))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}
