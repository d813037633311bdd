//! HTTP surface of the front-end.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum router, TraceLayer)
//!     → `/` and static paths: tower-http file services
//!     → `/api/data`: proxy.rs (single upstream GET, JSON pass-through)
//! ```

pub mod proxy;
pub mod server;

pub use proxy::ErrorEnvelope;
pub use server::{AppState, HttpServer};
