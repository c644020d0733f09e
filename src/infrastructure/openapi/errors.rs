//! Error types for OpenAPI document loading

use thiserror::Error;

/// Errors that can occur while loading an OpenAPI document.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Load error: {0}")]
    Load(String),

    #[error("Invalid OpenAPI document: {0}")]
    InvalidDocument(String),
}
