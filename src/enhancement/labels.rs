//! Fixed lookup tables mapping snippet target identifiers to display names.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Target identifier to display language name, as understood by syntax
/// highlighters. Targets outside this table keep their raw identifier.
static SNIPPET_TO_LINGUIST: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("c_libcurl", "C"),
        ("csharp_restsharp", "C#"),
        ("go_native", "Go"),
        ("java_okhttp", "Java"),
        ("java_unirest", "Java"),
        ("javascript_jquery", "JavaScript"),
        ("javascript_xhr", "JavaScript"),
        ("node_native", "JavaScript"),
        ("node_request", "JavaScript"),
        ("node_unirest", "JavaScript"),
        ("objc_nsurlsession", "Objective-C"),
        ("ocaml_cohttp", "Haskell"),
        ("php_curl", "PHP"),
        ("php_http1", "PHP"),
        ("php_http2", "PHP"),
        ("python_python3", "Python"),
        ("python_requests", "Python"),
        ("ruby_native", "Ruby"),
        ("shell_curl", "Shell"),
        ("shell_httpie", "Shell"),
        ("shell_wget", "Shell"),
        ("swift_nsurlsession", "Swift"),
    ])
});

/// Curated tab labels that take precedence over the generator's own title.
static SNIPPET_TO_PREFERRED_LABELS: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("go_native", "Go"),
        ("node_native", "JavaScript"),
        ("shell_curl", "cURL"),
        ("php_http2", "PHP"),
    ])
});

/// Display language name for a target identifier, if one is curated.
pub fn linguist_name(target_id: &str) -> Option<&'static str> {
    SNIPPET_TO_LINGUIST.get(target_id).copied()
}

/// Preferred tab label for a target identifier, if one is curated.
pub fn preferred_label(target_id: &str) -> Option<&'static str> {
    SNIPPET_TO_PREFERRED_LABELS.get(target_id).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linguist_name_known_targets() {
        assert_eq!(linguist_name("shell_curl"), Some("Shell"));
        assert_eq!(linguist_name("node_native"), Some("JavaScript"));
        assert_eq!(linguist_name("go_native"), Some("Go"));
        assert_eq!(linguist_name("php_http2"), Some("PHP"));
    }

    #[test]
    fn test_linguist_name_unknown_target() {
        assert_eq!(linguist_name("zig_std"), None);
    }

    #[test]
    fn test_preferred_label_is_curated_for_default_targets() {
        assert_eq!(preferred_label("shell_curl"), Some("cURL"));
        assert_eq!(preferred_label("node_native"), Some("JavaScript"));
        assert_eq!(preferred_label("go_native"), Some("Go"));
        assert_eq!(preferred_label("php_http2"), Some("PHP"));
    }

    #[test]
    fn test_preferred_label_absent_for_other_targets() {
        assert_eq!(preferred_label("shell_httpie"), None);
        assert_eq!(preferred_label("python_requests"), None);
    }
}
