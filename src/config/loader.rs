//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use crate::config::schema::FrontendConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable naming an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "ARES_CONFIG";

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<FrontendConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: FrontendConfig = toml::from_str(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Resolve the effective startup configuration.
///
/// Reads the file named by `ARES_CONFIG` when set, otherwise starts from
/// defaults. `BACKEND_URL` then overrides the upstream URL. The result is
/// validated once and remains fixed for the process lifetime.
pub fn load() -> Result<FrontendConfig, ConfigError> {
    let mut config = match std::env::var(CONFIG_PATH_VAR) {
        Ok(path) => load_config(Path::new(&path))?,
        Err(_) => FrontendConfig::default(),
    };

    config.apply_env();
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}
