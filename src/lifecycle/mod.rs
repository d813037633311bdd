//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup: load config → validate → bind listener → serve
//! Shutdown: Ctrl+C → Shutdown::trigger → server drains and exits
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Shutdown is a broadcast so tests can stop spawned servers too

pub mod shutdown;

pub use shutdown::Shutdown;
