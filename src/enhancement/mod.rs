//! Enhancement domain module - turns a static OpenAPI document into a
//! personalized, example-enriched document for developer documentation.
//!
//! The entry point is [`SpecEnhancer::enhance`]: a synchronous transformation
//! that replaces the document's `servers` list and attaches an
//! `x-code-samples` list to every operation. Snippet generation failures are
//! logged and suppressed per operation so a single broken endpoint can never
//! keep the rest of the documentation from rendering.

pub mod enhancer;
pub mod errors;
pub mod labels;
pub mod types;

pub use enhancer::*;
pub use errors::*;
pub use types::*;
