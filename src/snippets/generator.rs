//! Endpoint snippet generation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::snippets::{
    SnippetError, SnippetTarget, encode_content, request::build_sample_request,
    targets::renderer_for,
};

/// HTTP methods an OpenAPI path item can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

impl HttpMethod {
    /// Lowercase method name as it appears as a path item key.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = SnippetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(HttpMethod::Get),
            "post" => Ok(HttpMethod::Post),
            "put" => Ok(HttpMethod::Put),
            "delete" => Ok(HttpMethod::Delete),
            "patch" => Ok(HttpMethod::Patch),
            "head" => Ok(HttpMethod::Head),
            "options" => Ok(HttpMethod::Options),
            _ => Err(SnippetError::UnsupportedMethod(s.to_string())),
        }
    }
}

/// One rendered snippet. `content` is percent-encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Everything the generator produces for one operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointSnippets {
    pub method: String,
    pub url: String,
    pub snippets: Vec<Snippet>,
}

/// Source of endpoint snippets, a seam for substituting the built-in
/// generator in tests.
pub trait SnippetSource: Send + Sync {
    fn endpoint_snippets(
        &self,
        spec: &Value,
        path: &str,
        method: &str,
        targets: &[SnippetTarget],
    ) -> Result<EndpointSnippets, SnippetError>;
}

/// Built-in snippet generator working directly off the OpenAPI document.
pub struct SnippetGenerator;

impl SnippetGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Render snippets for the operation at `path`/`method`, one per target,
    /// in requested target order.
    pub fn endpoint_snippets(
        &self,
        spec: &Value,
        path: &str,
        method: &str,
        targets: &[SnippetTarget],
    ) -> Result<EndpointSnippets, SnippetError> {
        let http_method: HttpMethod = method.parse()?;

        let paths = spec
            .get("paths")
            .and_then(Value::as_object)
            .ok_or(SnippetError::MissingPaths)?;
        let path_item = paths
            .get(path)
            .filter(|item| item.is_object())
            .ok_or_else(|| SnippetError::UnknownOperation {
                path: path.to_string(),
                method: http_method.to_string(),
            })?;
        let operation = path_item
            .get(http_method.as_str())
            .filter(|operation| operation.is_object())
            .ok_or_else(|| SnippetError::UnknownOperation {
                path: path.to_string(),
                method: http_method.to_string(),
            })?;

        let request = build_sample_request(spec, path, http_method.as_str(), path_item, operation)?;

        let snippets = targets
            .iter()
            .map(|target| Snippet {
                id: target.id().to_string(),
                title: target.title().to_string(),
                content: encode_content(&renderer_for(*target).render(&request)),
            })
            .collect();

        Ok(EndpointSnippets {
            url: request.full_url(),
            method: request.method,
            snippets,
        })
    }
}

impl Default for SnippetGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl SnippetSource for SnippetGenerator {
    fn endpoint_snippets(
        &self,
        spec: &Value,
        path: &str,
        method: &str,
        targets: &[SnippetTarget],
    ) -> Result<EndpointSnippets, SnippetError> {
        SnippetGenerator::endpoint_snippets(self, spec, path, method, targets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snippets::decode_content;
    use serde_json::json;

    fn events_spec() -> Value {
        json!({
            "openapi": "3.0.0",
            "info": { "title": "Test API", "version": "1.0.0" },
            "servers": [{ "url": "https://api.example.com" }],
            "paths": {
                "/events/stripe": {
                    "post": {
                        "requestBody": {
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": { "id": { "type": "string" } }
                                    }
                                }
                            }
                        },
                        "responses": { "200": { "description": "ok" } }
                    }
                }
            }
        })
    }

    #[test]
    fn test_snippets_follow_requested_target_order() {
        let generator = SnippetGenerator::new();
        let endpoint = generator
            .endpoint_snippets(&events_spec(), "/events/stripe", "post", SnippetTarget::all())
            .unwrap();

        let ids: Vec<_> = endpoint.snippets.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["shell_curl", "node_native", "go_native", "php_http2"]);
        let titles: Vec<_> = endpoint.snippets.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, ["Shell + Curl", "Node + Native", "Go + Native", "PHP + Http2"]);
    }

    #[test]
    fn test_content_is_percent_encoded_curl() {
        let generator = SnippetGenerator::new();
        let endpoint = generator
            .endpoint_snippets(
                &events_spec(),
                "/events/stripe",
                "post",
                &[SnippetTarget::ShellCurl],
            )
            .unwrap();

        let content = &endpoint.snippets[0].content;
        assert!(!content.contains(' '));
        let decoded = decode_content(content);
        assert!(decoded.starts_with("curl --request POST"));
        assert!(decoded.contains("--url 'https://api.example.com/events/stripe'"));
        assert!(decoded.contains("--header 'content-type: application/json'"));
    }

    #[test]
    fn test_endpoint_carries_method_and_url() {
        let generator = SnippetGenerator::new();
        let endpoint = generator
            .endpoint_snippets(&events_spec(), "/events/stripe", "post", SnippetTarget::all())
            .unwrap();
        assert_eq!(endpoint.method, "POST");
        assert_eq!(endpoint.url, "https://api.example.com/events/stripe");
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let generator = SnippetGenerator::new();
        let result = generator.endpoint_snippets(
            &events_spec(),
            "/missing",
            "get",
            SnippetTarget::all(),
        );
        assert!(matches!(result, Err(SnippetError::UnknownOperation { .. })));
    }

    #[test]
    fn test_method_not_on_path_is_an_error() {
        let generator = SnippetGenerator::new();
        let result = generator.endpoint_snippets(
            &events_spec(),
            "/events/stripe",
            "delete",
            SnippetTarget::all(),
        );
        assert!(matches!(result, Err(SnippetError::UnknownOperation { .. })));
    }

    #[test]
    fn test_non_method_key_is_unsupported() {
        let generator = SnippetGenerator::new();
        let result = generator.endpoint_snippets(
            &events_spec(),
            "/events/stripe",
            "parameters",
            SnippetTarget::all(),
        );
        assert!(matches!(result, Err(SnippetError::UnsupportedMethod(_))));
    }

    #[test]
    fn test_method_lookup_is_case_insensitive() {
        let generator = SnippetGenerator::new();
        let endpoint = generator
            .endpoint_snippets(&events_spec(), "/events/stripe", "POST", SnippetTarget::all())
            .unwrap();
        assert_eq!(endpoint.method, "POST");
    }
}
