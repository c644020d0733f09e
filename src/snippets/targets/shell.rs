//! Shell + cURL renderer

use crate::snippets::{SampleRequest, SnippetRenderer, targets::shell_quote};

pub struct ShellCurlRenderer;

impl SnippetRenderer for ShellCurlRenderer {
    fn render(&self, request: &SampleRequest) -> String {
        let mut parts = vec![
            format!("curl --request {}", request.method),
            format!("--url {}", shell_quote(&request.full_url())),
        ];

        for (name, value) in &request.headers {
            parts.push(format!("--header {}", shell_quote(&format!("{name}: {value}"))));
        }

        if let Some(body) = request.body_text() {
            parts.push(format!("--data {}", shell_quote(&body)));
        }

        parts.join(" \\\n  ")
    }
}
