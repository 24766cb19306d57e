use miette::{Diagnostic, Result};
use thiserror::Error;

use crate::components::holidays::TransportError;

/// Main error type for the library
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Invalid value for '{property}': {message}")]
    #[diagnostic(code(aquacal::validation))]
    Validation {
        property: &'static str,
        message: String,
    },

    #[error(transparent)]
    #[diagnostic(code(aquacal::transport))]
    Transport(#[from] TransportError),

    #[error("Holiday response is not valid JSON: {0}")]
    #[diagnostic(code(aquacal::invalid_json))]
    InvalidJson(#[from] serde_json::Error),

    #[error("Environment error: {0}")]
    #[diagnostic(code(aquacal::environment))]
    Environment(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(code(aquacal::config))]
    Config(String),

    #[error(transparent)]
    #[diagnostic(code(aquacal::io))]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    #[diagnostic(code(aquacal::serialization))]
    Serialization(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

/// Type alias for Result with our Error type
pub type CalResult<T> = Result<T, Error>;

/// Helper to create validation errors
pub fn validation_error(property: &'static str, message: &str) -> Error {
    Error::Validation {
        property,
        message: message.to_string(),
    }
}

/// Helper to create environment errors
pub fn env_error(var: &str) -> Error {
    Error::Environment(format!("Invalid environment variable: {}", var))
}

/// Helper to create configuration errors
pub fn config_error(message: &str) -> Error {
    Error::Config(message.to_string())
}
