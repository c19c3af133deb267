//! HTTP server for Charla.
//!
//! Provides endpoints for:
//! - The chat API (`/api/ask`)
//! - The embedded chat page (`/`)
//! - Health check (`/healthz`)
//!
//! Plus the response-header and canonical-domain middleware the widget's
//! deployments rely on.

use std::sync::Arc;

use axum::{
    extract::{DefaultBodyLimit, Request, State},
    http::{header, HeaderValue, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod handlers;

/// Inbound request bodies larger than this are rejected outright.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the HTTP router.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer so the widget can be embedded cross-origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // API routes
        .route("/api/ask", post(handlers::ask))
        // UI routes
        .route("/", get(handlers::chat_page))
        // Observability routes
        .route("/healthz", get(handlers::healthz))
        // security_headers must wrap canonical_redirect: the 301 short-circuit
        // still has to carry the CSP and cache-suppression headers.
        .layer(middleware::from_fn_with_state(
            state.clone(),
            canonical_redirect,
        ))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers,
        ))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

/// Stamp every response with the CSP and cache-suppression headers.
async fn security_headers(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_str(&state.config.csp)
            .unwrap_or_else(|_| HeaderValue::from_static("frame-ancestors 'self'")),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("no-store, no-cache, must-revalidate, max-age=0"),
    );
    headers.insert(header::PRAGMA, HeaderValue::from_static("no-cache"));
    headers.insert(header::EXPIRES, HeaderValue::from_static("0"));
    response
}

/// 301 requests that arrive on a legacy host to the canonical domain.
async fn canonical_redirect(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    if let Some(canonical) = &state.config.canonical_domain {
        let host = request
            .headers()
            .get(header::HOST)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_ascii_lowercase();
        // Strip any port before the suffix check.
        let host = host.split(':').next().unwrap_or("");

        if host.ends_with(&state.config.legacy_host_suffix) {
            let location = format!("https://{}{}", canonical, request.uri().path());
            return (
                StatusCode::MOVED_PERMANENTLY,
                [(header::LOCATION, location)],
            )
                .into_response();
        }
    }
    next.run(request).await
}
