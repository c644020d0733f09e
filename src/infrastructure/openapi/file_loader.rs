//! File-based OpenAPI document loader

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;

use super::{LoadError, SpecLoader, validate_document};

/// Loads OpenAPI documents from local files, JSON or YAML.
pub struct FileSpecLoader;

impl FileSpecLoader {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl SpecLoader for FileSpecLoader {
    async fn load(&self, source: &str) -> Result<Value, LoadError> {
        let content = fs::read_to_string(source).await?;

        // Parse content as JSON or YAML, by extension with a sniffing fallback
        let document: Value = if source.ends_with(".json") {
            serde_json::from_str(&content)?
        } else if source.ends_with(".yaml") || source.ends_with(".yml") {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| LoadError::Load(format!("Failed to parse OpenAPI document: {e}")))?
        };

        validate_document(document)
    }
}

impl Default for FileSpecLoader {
    fn default() -> Self {
        Self::new()
    }
}
