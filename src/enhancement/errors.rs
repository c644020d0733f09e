//! Error types for the enhancement domain

use thiserror::Error;

/// Errors raised when the input document violates the enhancement contract.
///
/// Snippet generation failures are deliberately not represented here: they
/// are caught per operation, logged, and replaced with an empty sample list.
#[derive(Debug, Error)]
pub enum EnhanceError {
    #[error("OpenAPI document must be a JSON object")]
    NotAnObject,

    #[error("OpenAPI document has no 'paths' object")]
    MissingPaths,
}
