//! OpenAPI document loading implementations
//!
//! Loaders return the raw document as JSON so the enhancement step can pass
//! every field through untouched. Validation here is deliberately light: the
//! document must be an object carrying an object-valued `paths`.

pub mod composite_loader;
pub mod errors;
pub mod file_loader;
pub mod http_loader;

pub use composite_loader::CompositeSpecLoader;
pub use errors::LoadError;
pub use file_loader::FileSpecLoader;
pub use http_loader::HttpSpecLoader;

use async_trait::async_trait;
use serde_json::Value;

/// Loads an OpenAPI document from some source string (path or URL).
#[async_trait]
pub trait SpecLoader: Send + Sync {
    async fn load(&self, source: &str) -> Result<Value, LoadError>;
}

/// Check the shape every downstream consumer relies on.
pub(crate) fn validate_document(document: Value) -> Result<Value, LoadError> {
    let has_paths = document
        .as_object()
        .and_then(|obj| obj.get("paths"))
        .is_some_and(Value::is_object);
    if !has_paths {
        return Err(LoadError::InvalidDocument(
            "OpenAPI document must be an object with a 'paths' object".to_string(),
        ));
    }
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_file_spec_loader_json() {
        let loader = FileSpecLoader::new();

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let spec_json = r#"{
            "openapi": "3.0.0",
            "info": {
                "title": "Test API",
                "version": "1.0.0"
            },
            "paths": {}
        }"#;

        temp_file
            .write_all(spec_json.as_bytes())
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");

        let result = loader.load(temp_file.path().to_str().unwrap()).await;
        assert!(result.is_ok());

        let spec = result.unwrap();
        assert_eq!(spec["openapi"], "3.0.0");
        assert_eq!(spec["info"]["title"], "Test API");
        assert_eq!(spec["info"]["version"], "1.0.0");
    }

    #[tokio::test]
    async fn test_file_spec_loader_yaml() {
        let loader = FileSpecLoader::new();

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let spec_yaml = r#"openapi: 3.0.0
info:
  title: Test API
  version: 1.0.0
paths: {}"#;

        temp_file
            .write_all(spec_yaml.as_bytes())
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");

        let result = loader.load(temp_file.path().to_str().unwrap()).await;
        assert!(result.is_ok());

        let spec = result.unwrap();
        assert_eq!(spec["openapi"], "3.0.0");
        assert_eq!(spec["info"]["title"], "Test API");
    }

    #[tokio::test]
    async fn test_file_spec_loader_not_found() {
        let loader = FileSpecLoader::new();

        let result = loader.load("/nonexistent/file.yaml").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_loader_rejects_document_without_paths() {
        let loader = FileSpecLoader::new();

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        temp_file
            .write_all(br#"{ "openapi": "3.0.0" }"#)
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");

        let result = loader.load(temp_file.path().to_str().unwrap()).await;
        assert!(matches!(result, Err(LoadError::InvalidDocument(_))));
    }

    #[tokio::test]
    async fn test_composite_loader_file() {
        let loader = CompositeSpecLoader::new();

        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        let spec_json = r#"{
            "openapi": "3.0.0",
            "info": {
                "title": "Test API",
                "version": "1.0.0"
            },
            "paths": {}
        }"#;

        temp_file
            .write_all(spec_json.as_bytes())
            .expect("Failed to write temp file");
        temp_file.flush().expect("Failed to flush temp file");

        let result = loader.load(temp_file.path().to_str().unwrap()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_composite_loader_http() {
        use wiremock::matchers::{method, path};
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let mock_server = MockServer::start().await;

        let spec_json = r#"{
            "openapi": "3.0.0",
            "info": {
                "title": "HTTP Test API",
                "version": "2.0.0"
            },
            "paths": {}
        }"#;

        Mock::given(method("GET"))
            .and(path("/api-spec.json"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(spec_json)
                    .insert_header("content-type", "application/json"),
            )
            .mount(&mock_server)
            .await;

        let loader = CompositeSpecLoader::new();
        let url = format!("{}/api-spec.json", mock_server.uri());
        let result = loader.load(&url).await;

        assert!(result.is_ok());
        let spec = result.unwrap();
        assert_eq!(spec["info"]["title"], "HTTP Test API");
        assert_eq!(spec["info"]["version"], "2.0.0");
    }
}
