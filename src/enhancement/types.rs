//! Core types for the enhancement domain

use serde::{Deserialize, Serialize};

/// Extension key under which generated samples are attached to an operation.
pub const X_CODE_SAMPLES: &str = "x-code-samples";

/// One rendered call example for an operation.
///
/// `lang` is the display language name used for syntax highlighting,
/// `label` the human-facing tab title (may differ from `lang`, e.g. "cURL"
/// for a Shell sample), and `source` the ready-to-copy code text with the
/// credential placeholder already substituted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeSample {
    pub lang: String,
    pub label: String,
    pub source: String,
}

/// Caller-supplied values used to personalize generated samples.
#[derive(Debug, Clone, Default)]
pub struct TemplateValues {
    /// API token substituted into the credential placeholder. An empty token
    /// is tolerated and yields an empty credential.
    pub api_token: String,
}

impl TemplateValues {
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            api_token: api_token.into(),
        }
    }
}
