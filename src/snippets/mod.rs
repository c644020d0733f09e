//! Snippet generation module - renders ready-to-run call examples for one
//! OpenAPI operation in several target languages/tools.
//!
//! [`SnippetGenerator`] builds a sample HTTP request from the operation
//! (URL, headers, query, body skeleton) and renders it once per requested
//! [`SnippetTarget`]. Rendered content is percent-encoded; where an API-key
//! credential belongs, the literal [`KEY_PLACEHOLDER`] marker is left in
//! place for the caller to substitute.

pub mod errors;
pub mod generator;
pub mod request;
pub mod targets;

pub use errors::*;
pub use generator::*;
pub use request::*;
pub use targets::*;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Literal marker left in rendered snippets where a credential belongs.
pub const KEY_PLACEHOLDER: &str = "REPLACE_KEY_VALUE";

/// Characters kept verbatim when percent-encoding snippet content. Matches
/// the unreserved set of `encodeURIComponent`.
const CONTENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode rendered snippet text into wire-safe content.
pub fn encode_content(text: &str) -> String {
    utf8_percent_encode(text, CONTENT_ENCODE_SET).to_string()
}

/// Decode percent-encoded snippet content back into display text.
pub fn decode_content(content: &str) -> String {
    percent_decode_str(content).decode_utf8_lossy().into_owned()
}
