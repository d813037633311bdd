//! Ares front-end binary.
//!
//! # Architecture Overview
//!
//! ```text
//!                        ┌──────────────────────────────────────┐
//!                        │              FRONT-END                │
//!     Browser            │  ┌─────────┐      ┌───────────────┐  │
//!     ───────────────────┼─▶│  http   │─────▶│ static assets │  │
//!                        │  │ server  │      │  (public/)    │  │
//!                        │  └────┬────┘      └───────────────┘  │
//!                        │       │ GET /api/data                │
//!                        │       ▼                              │
//!                        │  ┌─────────┐                         │
//!     Browser            │  │  proxy  │──── GET ────────────────┼──▶ Upstream
//!     ◀──────────────────┼──│ handler │◀─── JSON ───────────────┼──  backend
//!                        │  └─────────┘                         │
//!                        └──────────────────────────────────────┘
//! ```
//!
//! Two independent handlers on one listener: a file service for the SPA
//! and a single pass-through proxy endpoint. No routing table, no state
//! shared between requests.

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ares_frontend::config;
use ares_frontend::http::HttpServer;
use ares_frontend::lifecycle::Shutdown;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ares_frontend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("ares-frontend v0.1.0 starting");

    // Load configuration: optional TOML file, then BACKEND_URL override
    let config = config::load()?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        static_root = %config.static_assets.root.display(),
        upstream_url = %config.upstream.url,
        "Configuration loaded"
    );

    // Bind TCP listener
    let listener = TcpListener::bind(&config.listener.bind_address).await?;

    // Trigger graceful shutdown on Ctrl+C
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Shutdown signal received");
            shutdown.trigger();
        }
    });

    // Create and run HTTP server
    let server = HttpServer::new(config)?;
    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
