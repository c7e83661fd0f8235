//! Configuration and route tree loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::I18nConfig;
use crate::config::validation::{validate_config, ValidationError};
use crate::routing::route::Route;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Route tree error: {0}")]
    Routes(#[from] serde_json::Error),

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

/// Parse, complete and validate a TOML configuration.
pub fn parse_config(content: &str) -> Result<I18nConfig, ConfigError> {
    let mut config: I18nConfig = toml::from_str(content)?;
    config.apply_fallbacks();

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<I18nConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Load a JSON route tree (an array of routes).
pub fn load_routes(path: &Path) -> Result<Vec<Route>, ConfigError> {
    let content = fs::read_to_string(path)?;
    let routes: Vec<Route> = serde_json::from_str(&content)?;
    Ok(routes)
}
