//! samplify — enrich OpenAPI specifications with ready-to-run code samples.
//!
//! The library takes an OpenAPI document (JSON or YAML, version 2 or 3),
//! replaces its `servers` list with the deployment's public endpoint, and
//! attaches an `x-code-samples` list to every operation: one rendered call
//! example per snippet target (cURL, JavaScript, Go, PHP), personalized with
//! the caller's API token.
//!
//! The transformation itself ([`enhancement::SpecEnhancer`]) is pure and
//! synchronous; loading documents from files or URLs lives in
//! [`infrastructure`].
#![deny(unsafe_code)]

pub mod config;
pub mod enhancement;
pub mod infrastructure;
pub mod snippets;

pub use config::Config;
pub use enhancement::{CodeSample, SpecEnhancer, TemplateValues};
pub use snippets::{SnippetGenerator, SnippetTarget};
