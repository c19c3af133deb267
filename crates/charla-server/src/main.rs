//! Charla HTTP Service
//!
//! Thin plumbing around the core: routing, security headers, rate limiting,
//! persona selection, and the policy guard. All conversation state lives
//! client-side; every request is handled independently.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod http;
mod notices;
mod persona;
mod policy;
mod ratelimit;
mod state;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load config
    let config = Config::from_env();
    let addr: SocketAddr = config.bind_addr.parse()?;

    info!(
        bind_addr = %addr,
        model = %config.model,
        credential = config.api_key.is_some(),
        "Starting Charla"
    );

    // Create shared state
    let state = AppState::new(config)?;

    // Create HTTP router
    let router = http::create_router(state);

    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
