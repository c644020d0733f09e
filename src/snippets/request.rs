//! Sample request construction
//!
//! Builds a concrete, renderable HTTP request from one OpenAPI operation:
//! URL with path parameters substituted, query parameters and headers with
//! sample values, a request body skeleton, and the credential placeholder
//! where a security scheme applies.

use serde_json::{Map, Value, json};

use crate::snippets::{KEY_PLACEHOLDER, SnippetError, encode_content};

/// Maximum depth when deriving a body skeleton from a schema. Guards against
/// self-referential schemas.
const MAX_SCHEMA_DEPTH: usize = 4;

/// A concrete HTTP request with sample values, ready for rendering.
#[derive(Debug, Clone)]
pub struct SampleRequest {
    /// Uppercase HTTP method.
    pub method: String,
    /// Absolute or root-relative URL, path parameters substituted, no query.
    pub url: String,
    /// Query parameters in declaration order.
    pub query: Vec<(String, String)>,
    /// Headers in declaration order, names lowercased.
    pub headers: Vec<(String, String)>,
    /// Request body skeleton, if the operation takes one.
    pub body: Option<Value>,
}

impl SampleRequest {
    /// URL including the query string.
    pub fn full_url(&self) -> String {
        if self.query.is_empty() {
            return self.url.clone();
        }
        let query = self
            .query
            .iter()
            .map(|(name, value)| format!("{name}={}", encode_content(value)))
            .collect::<Vec<_>>()
            .join("&");
        format!("{}?{}", self.url, query)
    }

    /// Compact JSON text of the body skeleton.
    pub fn body_text(&self) -> Option<String> {
        self.body.as_ref().map(Value::to_string)
    }
}

/// Build a [`SampleRequest`] for the operation at `path`/`method`.
///
/// `path_item` and `operation` are the already-located objects under
/// `spec.paths`; `spec` is needed for `$ref` resolution and security scheme
/// lookup.
pub fn build_sample_request(
    spec: &Value,
    path: &str,
    method: &str,
    path_item: &Value,
    operation: &Value,
) -> Result<SampleRequest, SnippetError> {
    let parameters = collect_parameters(spec, path_item, operation)?;

    let mut url_path = path.to_string();
    let mut query = Vec::new();
    let mut headers = Vec::new();

    for parameter in &parameters {
        let name = parameter.get("name").and_then(Value::as_str).unwrap_or("");
        let value = parameter_sample_value(spec, parameter)?;
        match parameter.get("in").and_then(Value::as_str) {
            Some("path") => {
                url_path = url_path.replace(&format!("{{{name}}}"), &value);
            }
            Some("query") => query.push((name.to_string(), value)),
            Some("header") => headers.push((name.to_lowercase(), value)),
            _ => {}
        }
    }

    let body = request_body_sample(spec, operation, &mut headers)?;
    if let Some(accept) = first_response_media_type(operation) {
        headers.push(("accept".to_string(), accept));
    }
    apply_security(spec, operation, &mut query, &mut headers)?;

    Ok(SampleRequest {
        method: method.to_uppercase(),
        url: format!("{}{url_path}", base_url(spec)),
        query,
        headers,
        body,
    })
}

/// First server base URL, without a trailing slash. Empty when the document
/// declares no servers.
fn base_url(spec: &Value) -> String {
    spec.get("servers")
        .and_then(Value::as_array)
        .and_then(|servers| servers.first())
        .and_then(|server| server.get("url"))
        .and_then(Value::as_str)
        .map(|url| url.trim_end_matches('/').to_string())
        .unwrap_or_default()
}

/// Merge path-level and operation-level parameters, operation entries taking
/// precedence on (name, location) collisions.
fn collect_parameters(
    spec: &Value,
    path_item: &Value,
    operation: &Value,
) -> Result<Vec<Value>, SnippetError> {
    let mut merged: Vec<Value> = Vec::new();
    for source in [path_item, operation] {
        let Some(list) = source.get("parameters").and_then(Value::as_array) else {
            continue;
        };
        for parameter in list {
            let parameter = deref(spec, parameter)?.clone();
            let key = (
                parameter
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
                parameter
                    .get("in")
                    .and_then(Value::as_str)
                    .unwrap_or("")
                    .to_string(),
            );
            merged.retain(|existing: &Value| {
                (
                    existing.get("name").and_then(Value::as_str).unwrap_or(""),
                    existing.get("in").and_then(Value::as_str).unwrap_or(""),
                ) != (key.0.as_str(), key.1.as_str())
            });
            merged.push(parameter);
        }
    }
    Ok(merged)
}

/// Sample value for one parameter: its example if present, otherwise a
/// `SOME_<TYPE>_VALUE` marker derived from the schema type.
fn parameter_sample_value(spec: &Value, parameter: &Value) -> Result<String, SnippetError> {
    let schema = match parameter.get("schema") {
        Some(schema) => Some(deref(spec, schema)?),
        None => None,
    };

    let example = parameter
        .get("example")
        .or_else(|| schema.and_then(|s| s.get("example")));
    if let Some(example) = example {
        return Ok(stringify(example));
    }

    let schema_type = schema
        .and_then(|s| s.get("type"))
        .and_then(Value::as_str)
        // Swagger 2 declares the type on the parameter itself.
        .or_else(|| parameter.get("type").and_then(Value::as_str))
        .unwrap_or("string");
    Ok(format!("SOME_{}_VALUE", schema_type.to_uppercase()))
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Body skeleton from the operation's request body, pushing a content-type
/// header for the first declared media type.
fn request_body_sample(
    spec: &Value,
    operation: &Value,
    headers: &mut Vec<(String, String)>,
) -> Result<Option<Value>, SnippetError> {
    let Some(request_body) = operation.get("requestBody") else {
        return Ok(None);
    };
    let request_body = deref(spec, request_body)?;
    let Some(content) = request_body.get("content").and_then(Value::as_object) else {
        return Ok(None);
    };
    let Some((media_type, media_object)) = content.iter().next() else {
        return Ok(None);
    };

    headers.push(("content-type".to_string(), media_type.clone()));

    if let Some(example) = media_object.get("example") {
        return Ok(Some(example.clone()));
    }
    match media_object.get("schema") {
        Some(schema) => Ok(Some(schema_sample(spec, schema, MAX_SCHEMA_DEPTH)?)),
        None => Ok(None),
    }
}

/// Media type of the first declared response, used for the accept header.
fn first_response_media_type(operation: &Value) -> Option<String> {
    operation
        .get("responses")
        .and_then(Value::as_object)?
        .iter()
        .find_map(|(_, response)| {
            response
                .get("content")
                .and_then(Value::as_object)?
                .keys()
                .next()
                .cloned()
        })
}

/// Derive a sample value from a schema: example, then first enum entry, then
/// a type-appropriate placeholder.
fn schema_sample(spec: &Value, schema: &Value, depth: usize) -> Result<Value, SnippetError> {
    if depth == 0 {
        return Ok(Value::Null);
    }
    let schema = deref(spec, schema)?;

    if let Some(example) = schema.get("example") {
        return Ok(example.clone());
    }
    if let Some(first) = schema
        .get("enum")
        .and_then(Value::as_array)
        .and_then(|values| values.first())
    {
        return Ok(first.clone());
    }

    let schema_type = schema.get("type").and_then(Value::as_str);
    match schema_type {
        Some("object") | None if schema.get("properties").is_some() => {
            let mut sample = Map::new();
            if let Some(properties) = schema.get("properties").and_then(Value::as_object) {
                for (name, property) in properties {
                    sample.insert(name.clone(), schema_sample(spec, property, depth - 1)?);
                }
            }
            Ok(Value::Object(sample))
        }
        Some("object") => Ok(json!({})),
        Some("array") => match schema.get("items") {
            Some(items) => Ok(json!([schema_sample(spec, items, depth - 1)?])),
            None => Ok(json!([])),
        },
        Some("integer") | Some("number") => Ok(json!(0)),
        Some("boolean") => Ok(json!(true)),
        _ => Ok(json!("string")),
    }
}

/// Add the credential placeholder for every security scheme the operation
/// requires. Operation-level requirements override document-level ones.
fn apply_security(
    spec: &Value,
    operation: &Value,
    query: &mut Vec<(String, String)>,
    headers: &mut Vec<(String, String)>,
) -> Result<(), SnippetError> {
    let requirements = operation
        .get("security")
        .or_else(|| spec.get("security"))
        .and_then(Value::as_array);
    let Some(requirements) = requirements else {
        return Ok(());
    };

    for requirement in requirements {
        let Some(requirement) = requirement.as_object() else {
            continue;
        };
        for scheme_name in requirement.keys() {
            let Some(scheme) = security_scheme(spec, scheme_name) else {
                continue;
            };
            match scheme.get("type").and_then(Value::as_str) {
                Some("apiKey") => {
                    let name = scheme.get("name").and_then(Value::as_str).unwrap_or("");
                    match scheme.get("in").and_then(Value::as_str) {
                        Some("header") => {
                            headers.push((name.to_lowercase(), KEY_PLACEHOLDER.to_string()));
                        }
                        Some("query") => {
                            query.push((name.to_string(), KEY_PLACEHOLDER.to_string()));
                        }
                        _ => {}
                    }
                }
                Some("http") => match scheme.get("scheme").and_then(Value::as_str) {
                    Some("basic") => headers.push((
                        "authorization".to_string(),
                        "Basic REPLACE_BASIC_AUTH".to_string(),
                    )),
                    Some("bearer") => headers.push((
                        "authorization".to_string(),
                        "Bearer REPLACE_BEARER_TOKEN".to_string(),
                    )),
                    _ => {}
                },
                Some("basic") => headers.push((
                    "authorization".to_string(),
                    "Basic REPLACE_BASIC_AUTH".to_string(),
                )),
                _ => {}
            }
        }
    }
    Ok(())
}

/// Security scheme by name, checking the OpenAPI 3 location first and the
/// Swagger 2 one as fallback.
fn security_scheme<'a>(spec: &'a Value, name: &str) -> Option<&'a Value> {
    spec.get("components")
        .and_then(|components| components.get("securitySchemes"))
        .and_then(|schemes| schemes.get(name))
        .or_else(|| {
            spec.get("securityDefinitions")
                .and_then(|schemes| schemes.get(name))
        })
}

/// Follow a local `$ref`, if present.
fn deref<'a>(spec: &'a Value, value: &'a Value) -> Result<&'a Value, SnippetError> {
    let Some(reference) = value.get("$ref").and_then(Value::as_str) else {
        return Ok(value);
    };
    let Some(pointer) = reference.strip_prefix('#') else {
        return Err(SnippetError::UnresolvedReference(reference.to_string()));
    };
    spec.pointer(pointer)
        .ok_or_else(|| SnippetError::UnresolvedReference(reference.to_string()))
}
