//! Error types for snippet generation

use thiserror::Error;

/// Errors that can occur while generating snippets for one operation.
#[derive(Debug, Error)]
pub enum SnippetError {
    #[error("OpenAPI document has no 'paths' object")]
    MissingPaths,

    #[error("no operation at {method} {path}")]
    UnknownOperation { path: String, method: String },

    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("unable to resolve reference: {0}")]
    UnresolvedReference(String),
}
