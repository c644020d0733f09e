//! HTTP-based OpenAPI document loader

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use super::{LoadError, SpecLoader, validate_document};

/// Loads OpenAPI documents from HTTP/HTTPS URLs.
pub struct HttpSpecLoader {
    client: Client,
}

impl HttpSpecLoader {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .expect("Failed to create HTTP client");

        Self { client }
    }
}

impl Default for HttpSpecLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SpecLoader for HttpSpecLoader {
    async fn load(&self, source: &str) -> Result<Value, LoadError> {
        // Only handle HTTP(S) URLs
        if !source.starts_with("http://") && !source.starts_with("https://") {
            return Err(LoadError::Load(format!(
                "HttpSpecLoader only handles HTTP(S) URLs, got: {source}"
            )));
        }

        let response = self.client.get(source).send().await.map_err(|e| {
            LoadError::Load(format!("Failed to fetch OpenAPI document from {source}: {e}"))
        })?;

        // Check status and get content type before consuming the response
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Load(format!(
                "HTTP {status} when fetching {source}"
            )));
        }

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();

        let content = response
            .text()
            .await
            .map_err(|e| LoadError::Load(format!("Failed to read response body: {e}")))?;

        // Parse based on content type or URL extension
        let document: Value = if content_type.contains("json") || source.ends_with(".json") {
            serde_json::from_str(&content)?
        } else if content_type.contains("yaml")
            || source.ends_with(".yaml")
            || source.ends_with(".yml")
        {
            serde_yaml::from_str(&content)?
        } else {
            serde_json::from_str(&content)
                .or_else(|_| serde_yaml::from_str(&content))
                .map_err(|e| LoadError::Load(format!("Failed to parse OpenAPI document: {e}")))?
        };

        validate_document(document)
    }
}
