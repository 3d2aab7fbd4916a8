//! Unigroup HTTP Server Binary
//!
//! This is the main entry point for the group mini-app REST API server.
//! It builds the fixture data source, sets up the HTTP router, and starts
//! serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin unigroup-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use unigroup_rust::host::HostBridge;
use unigroup_rust::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting Unigroup HTTP Server");

    // Fixture data is built once here and injected; nothing else holds state
    let state = AppState::with_fixtures();
    info!("Serving fixture data for group {}", state.group);

    // The server runs standalone; an embedding shell would inject Available
    let bridge = HostBridge::Unavailable;

    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    bridge.signal_ready();
    bridge.expand_viewport();
    if let Some(user) = bridge.current_user() {
        info!("Embedded session for {}", user.display_name());
    }

    axum::serve(listener, app).await?;

    Ok(())
}
