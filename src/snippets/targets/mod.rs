//! Snippet targets and their renderers.
//!
//! A target names one language/library/tool combination. Each target has a
//! renderer that turns a [`SampleRequest`](crate::snippets::SampleRequest)
//! into display-ready source text.

pub mod go;
pub mod node;
pub mod php;
pub mod shell;

pub use go::GoNativeRenderer;
pub use node::NodeNativeRenderer;
pub use php::PhpHttp2Renderer;
pub use shell::ShellCurlRenderer;

use std::fmt;

use crate::snippets::SampleRequest;

/// Language/tool combinations the built-in generator can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetTarget {
    ShellCurl,
    NodeNative,
    GoNative,
    PhpHttp2,
}

impl SnippetTarget {
    /// All targets, in the fixed order they are requested for enhancement.
    pub fn all() -> &'static [SnippetTarget] {
        &[
            SnippetTarget::ShellCurl,
            SnippetTarget::NodeNative,
            SnippetTarget::GoNative,
            SnippetTarget::PhpHttp2,
        ]
    }

    /// Wire identifier of this target.
    pub fn id(&self) -> &'static str {
        match self {
            SnippetTarget::ShellCurl => "shell_curl",
            SnippetTarget::NodeNative => "node_native",
            SnippetTarget::GoNative => "go_native",
            SnippetTarget::PhpHttp2 => "php_http2",
        }
    }

    /// Human-readable title, identifier parts capitalized and joined.
    pub fn title(&self) -> &'static str {
        match self {
            SnippetTarget::ShellCurl => "Shell + Curl",
            SnippetTarget::NodeNative => "Node + Native",
            SnippetTarget::GoNative => "Go + Native",
            SnippetTarget::PhpHttp2 => "PHP + Http2",
        }
    }
}

impl fmt::Display for SnippetTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Renders a sample request as source text for one target.
pub trait SnippetRenderer {
    fn render(&self, request: &SampleRequest) -> String;
}

/// Renderer for a target.
pub(crate) fn renderer_for(target: SnippetTarget) -> &'static dyn SnippetRenderer {
    match target {
        SnippetTarget::ShellCurl => &ShellCurlRenderer,
        SnippetTarget::NodeNative => &NodeNativeRenderer,
        SnippetTarget::GoNative => &GoNativeRenderer,
        SnippetTarget::PhpHttp2 => &PhpHttp2Renderer,
    }
}

/// Escape text for a single-quoted shell word.
pub(crate) fn shell_quote(text: &str) -> String {
    format!("'{}'", text.replace('\'', r"'\''"))
}

/// Escape text for a double-quoted Go or JavaScript string literal.
pub(crate) fn double_quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('\\', r"\\").replace('"', "\\\""))
}

/// Escape text for a single-quoted PHP string literal.
pub(crate) fn php_quote(text: &str) -> String {
    format!("'{}'", text.replace('\\', r"\\").replace('\'', r"\'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_targets_in_request_order() {
        let ids: Vec<_> = SnippetTarget::all().iter().map(|t| t.id()).collect();
        assert_eq!(ids, ["shell_curl", "node_native", "go_native", "php_http2"]);
    }

    #[test]
    fn test_titles() {
        assert_eq!(SnippetTarget::ShellCurl.title(), "Shell + Curl");
        assert_eq!(SnippetTarget::NodeNative.title(), "Node + Native");
        assert_eq!(SnippetTarget::GoNative.title(), "Go + Native");
        assert_eq!(SnippetTarget::PhpHttp2.title(), "PHP + Http2");
    }

    #[test]
    fn test_shell_quote_escapes_embedded_quotes() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn test_double_quoted_escapes_json() {
        assert_eq!(double_quoted(r#"{"a":1}"#), r#""{\"a\":1}""#);
    }

    #[test]
    fn test_php_quote_escapes_single_quotes() {
        assert_eq!(php_quote("o'clock"), r"'o\'clock'");
    }
}
