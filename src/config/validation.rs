//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the bind address parses as a socket address
//! - Check the upstream URL is an absolute http(s) URL
//!
//! # Design Decisions
//! - Returns all validation errors, not just the first
//! - Validation is a pure function: FrontendConfig → Result<(), Vec<ValidationError>>
//! - Runs after environment overrides, before the config enters the system

use std::net::SocketAddr;

use url::Url;

use crate::config::schema::FrontendConfig;

/// A single semantic validation failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BindAddress(String),
    UpstreamUrl(String),
    EmptyIndex,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::BindAddress(addr) => {
                write!(f, "invalid bind address '{}'", addr)
            }
            ValidationError::UpstreamUrl(url) => {
                write!(f, "invalid upstream URL '{}'", url)
            }
            ValidationError::EmptyIndex => {
                write!(f, "static_assets.index must not be empty")
            }
        }
    }
}

/// Validate a configuration, collecting every failure.
pub fn validate_config(config: &FrontendConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    match Url::parse(&config.upstream.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        _ => errors.push(ValidationError::UpstreamUrl(config.upstream.url.clone())),
    }

    if config.static_assets.index.is_empty() {
        errors.push(ValidationError::EmptyIndex);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
