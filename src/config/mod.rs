//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional, named by ARES_CONFIG)
//!     → loader.rs (parse & deserialize)
//!     → BACKEND_URL environment override
//!     → validation.rs (semantic checks)
//!     → FrontendConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup and stays fixed for the process lifetime
//! - All fields have defaults so the service runs with no file at all
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load, load_config, ConfigError};
pub use schema::{FrontendConfig, ListenerConfig, StaticAssetsConfig, UpstreamConfig};
