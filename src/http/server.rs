//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router (static assets + proxy endpoint)
//! - Resolve the upstream URL and HTTP client once at startup
//! - Wire up middleware (request tracing)
//! - Serve with graceful shutdown

use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use url::Url;

use crate::config::validation::ValidationError;
use crate::config::{ConfigError, FrontendConfig};
use crate::http::proxy;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Outbound HTTP client, built once at startup.
    pub client: reqwest::Client,

    /// Upstream URL the proxy endpoint calls.
    pub upstream: Url,
}

/// HTTP server for the front-end.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    ///
    /// The upstream URL and HTTP client are resolved here; handlers
    /// receive them through [`AppState`]. No globals.
    pub fn new(config: FrontendConfig) -> Result<Self, ConfigError> {
        let upstream = Url::parse(&config.upstream.url).map_err(|_| {
            ConfigError::Validation(vec![ValidationError::UpstreamUrl(
                config.upstream.url.clone(),
            )])
        })?;

        // No timeout configured: a hanging upstream holds open its own
        // inbound connection but never blocks other requests.
        let client = reqwest::Client::new();

        let state = AppState { client, upstream };
        let router = Self::build_router(&config, state);

        Ok(Self { router })
    }

    /// Build the Axum router.
    ///
    /// The root path always serves the designated index file, whatever
    /// other assets exist. Every other path falls through to the static
    /// directory; unmatched paths get its not-found response (404, empty
    /// body).
    fn build_router(config: &FrontendConfig, state: AppState) -> Router {
        let root = &config.static_assets.root;
        let index = ServeFile::new(root.join(&config.static_assets.index));

        Router::new()
            .route("/api/data", get(proxy::fetch_upstream))
            .route_service("/", index)
            .fallback_service(ServeDir::new(root))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "Ares front-end listening"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
