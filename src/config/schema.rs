//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files,
//! with defaults matching the service's fixed contract: port 3000, static
//! assets under `public/`, upstream `http://localhost:8000/api`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Upstream URL used when neither config file nor `BACKEND_URL` supply one.
pub const DEFAULT_UPSTREAM_URL: &str = "http://localhost:8000/api";

/// Environment variable overriding the upstream URL, used verbatim.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Root configuration for the front-end.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FrontendConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Static asset serving.
    pub static_assets: StaticAssetsConfig,

    /// Upstream backend called by the proxy endpoint.
    pub upstream: UpstreamConfig,
}

impl FrontendConfig {
    /// Apply environment overrides.
    ///
    /// `BACKEND_URL`, when set, replaces the upstream URL verbatim. Called
    /// once at startup; the config is immutable afterwards.
    pub fn apply_env(&mut self) {
        if let Ok(url) = std::env::var(BACKEND_URL_VAR) {
            self.upstream.url = url;
        }
    }
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:3000".to_string(),
        }
    }
}

/// Static asset configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StaticAssetsConfig {
    /// Directory served as the site's public assets.
    pub root: PathBuf,

    /// File under `root` served for the root path.
    pub index: String,
}

impl Default for StaticAssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("public"),
            index: "index.html".to_string(),
        }
    }
}

/// Upstream backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// URL the proxy endpoint calls. No query string or headers are added.
    pub url: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_UPSTREAM_URL.to_string(),
        }
    }
}
