//! Health check handler.

use axum::response::IntoResponse;

/// Health check endpoint.
pub async fn healthz() -> impl IntoResponse {
    "ok"
}
