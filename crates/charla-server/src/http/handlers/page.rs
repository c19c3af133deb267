//! The embedded chat page.
//!
//! Presentation only. The page keeps the transcript in `localStorage` and
//! resends the recent window with every question; the server stores nothing.

use axum::response::Html;

/// Serve the chat widget page.
pub async fn chat_page() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
