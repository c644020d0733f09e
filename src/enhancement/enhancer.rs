//! The spec enhancement transformation

use serde_json::{Map, Value, json};

use crate::enhancement::{
    CodeSample, EnhanceError, TemplateValues, X_CODE_SAMPLES,
    labels::{linguist_name, preferred_label},
};
use crate::snippets::{
    KEY_PLACEHOLDER, SnippetGenerator, SnippetSource, SnippetTarget, decode_content,
};

/// Transforms a static OpenAPI document into a personalized,
/// example-enriched document for display.
///
/// The enhancer never mutates its input: [`SpecEnhancer::enhance`] returns a
/// new document with the same top-level fields, a replaced `servers` list,
/// and an `x-code-samples` list attached to every operation.
pub struct SpecEnhancer {
    endpoint_url: String,
    source: Box<dyn SnippetSource>,
}

impl SpecEnhancer {
    /// Create an enhancer backed by the built-in snippet generator.
    ///
    /// `endpoint_url` is the deployment's public endpoint; it replaces
    /// whatever `servers` the input document carries.
    pub fn new(endpoint_url: impl Into<String>) -> Self {
        Self::with_source(endpoint_url, Box::new(SnippetGenerator::new()))
    }

    /// Create an enhancer with a custom snippet source.
    pub fn with_source(endpoint_url: impl Into<String>, source: Box<dyn SnippetSource>) -> Self {
        Self {
            endpoint_url: endpoint_url.into(),
            source,
        }
    }

    /// Enhance `spec` with code samples personalized from `values`.
    ///
    /// Errors only when the document is not an object or has no `paths`
    /// object. A snippet source failure for one operation is logged and
    /// yields an empty sample list for that operation; every other
    /// operation is enhanced unaffected.
    pub fn enhance(&self, spec: &Value, values: &TemplateValues) -> Result<Value, EnhanceError> {
        let document = spec.as_object().ok_or(EnhanceError::NotAnObject)?;
        let paths = document
            .get("paths")
            .and_then(Value::as_object)
            .ok_or(EnhanceError::MissingPaths)?;

        let mut enhanced_paths = Map::new();
        for (path_key, methods) in paths {
            enhanced_paths.insert(
                path_key.clone(),
                self.enhance_methods(spec, path_key, methods, values),
            );
        }

        let mut enhanced = document.clone();
        enhanced.insert("servers".to_string(), json!([{ "url": self.endpoint_url }]));
        enhanced.insert("paths".to_string(), Value::Object(enhanced_paths));

        Ok(Value::Object(enhanced))
    }

    /// Enhance every method entry under one path. Non-object entries (e.g. a
    /// path-level `parameters` array or `summary` string) pass through
    /// untouched.
    fn enhance_methods(
        &self,
        spec: &Value,
        path_key: &str,
        methods: &Value,
        values: &TemplateValues,
    ) -> Value {
        let Some(methods_obj) = methods.as_object() else {
            return methods.clone();
        };

        let mut enhanced = Map::new();
        for (method_key, operation) in methods_obj {
            let Some(operation_obj) = operation.as_object() else {
                enhanced.insert(method_key.clone(), operation.clone());
                continue;
            };

            let samples = self.code_samples(spec, path_key, method_key, values);
            let mut enhanced_operation = operation_obj.clone();
            enhanced_operation.insert(
                X_CODE_SAMPLES.to_string(),
                Value::Array(
                    samples
                        .iter()
                        .map(|s| {
                            json!({ "lang": s.lang, "label": s.label, "source": s.source })
                        })
                        .collect(),
                ),
            );
            enhanced.insert(method_key.clone(), Value::Object(enhanced_operation));
        }

        Value::Object(enhanced)
    }

    /// Generate the code samples for one operation, suppressing generator
    /// failures into an empty list.
    fn code_samples(
        &self,
        spec: &Value,
        path_key: &str,
        method_key: &str,
        values: &TemplateValues,
    ) -> Vec<CodeSample> {
        let endpoint =
            match self
                .source
                .endpoint_snippets(spec, path_key, method_key, SnippetTarget::all())
            {
                Ok(endpoint) => endpoint,
                Err(error) => {
                    tracing::warn!(
                        path = path_key,
                        method = method_key,
                        error = %error,
                        "snippet generation failed, omitting code samples"
                    );
                    return Vec::new();
                }
            };

        let credential = format!("ApiKey {}", values.api_token);
        endpoint
            .snippets
            .iter()
            .map(|snippet| CodeSample {
                lang: linguist_name(&snippet.id)
                    .map(str::to_string)
                    .unwrap_or_else(|| snippet.id.clone()),
                label: preferred_label(&snippet.id)
                    .map(str::to_string)
                    .unwrap_or_else(|| snippet.title.clone()),
                source: decode_content(&snippet.content).replacen(KEY_PLACEHOLDER, &credential, 1),
            })
            .collect()
    }
}
