//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::{ComponentKeyMode, Config};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("router.component_separator must not be empty when component_key = \"prefix\"")]
    EmptySeparator,
    #[error("log.filter is not a valid filter directive: {0}")]
    InvalidFilter(String),
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.router.component_key == ComponentKeyMode::Prefix
        && config.router.component_separator.is_empty()
    {
        errors.push(ValidationError::EmptySeparator);
    }

    if let Err(e) = EnvFilter::try_new(&config.log.filter) {
        errors.push(ValidationError::InvalidFilter(e.to_string()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
