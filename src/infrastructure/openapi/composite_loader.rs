//! Composite OpenAPI loader that picks a loading strategy per source

use async_trait::async_trait;
use serde_json::Value;

use super::{FileSpecLoader, HttpSpecLoader, LoadError, SpecLoader};

/// Composite loader dispatching between the HTTP and file loaders.
pub struct CompositeSpecLoader {
    http: HttpSpecLoader,
    file: FileSpecLoader,
}

impl CompositeSpecLoader {
    pub fn new() -> Self {
        Self {
            http: HttpSpecLoader::new(),
            file: FileSpecLoader::new(),
        }
    }
}

impl Default for CompositeSpecLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpecLoader for CompositeSpecLoader {
    async fn load(&self, source: &str) -> Result<Value, LoadError> {
        if source.starts_with("http://") || source.starts_with("https://") {
            tracing::debug!(source, "loading OpenAPI document over HTTP");
            self.http.load(source).await
        } else {
            tracing::debug!(source, "loading OpenAPI document from file");
            self.file.load(source).await
        }
    }
}
