//! ClaimCheck Web Server
//!
//! Run with: cargo run -p claimcheck-web

use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use claimcheck_common::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::load()?;
    info!(backend = %config.backend.api_url, "Starting ClaimCheck web server...");

    // Create app state
    let state = claimcheck_web::state::AppState::from_config(&config)?;

    // Build router
    let app = claimcheck_web::router::build_router(state);

    let addr: SocketAddr = config.server.bind.parse()?;
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
