//! Ares front-end library.
//!
//! Serves a static single-page application and proxies one GET endpoint
//! to a configurable upstream backend.

pub mod config;
pub mod http;
pub mod lifecycle;

pub use config::FrontendConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
