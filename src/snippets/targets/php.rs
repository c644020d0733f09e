//! PHP + pecl/http v2 renderer

use crate::snippets::{SampleRequest, SnippetRenderer, targets::php_quote};

pub struct PhpHttp2Renderer;

impl SnippetRenderer for PhpHttp2Renderer {
    fn render(&self, request: &SampleRequest) -> String {
        let mut output = String::new();
        output.push_str("<?php\n\n");
        output.push_str("$client = new http\\Client;\n");
        output.push_str("$request = new http\\Client\\Request;\n\n");
        output.push_str(&format!(
            "$request->setRequestUrl({});\n",
            php_quote(&request.url)
        ));
        output.push_str(&format!(
            "$request->setRequestMethod({});\n",
            php_quote(&request.method)
        ));

        if let Some(body) = request.body_text() {
            output.push_str("$body = new http\\Message\\Body;\n");
            output.push_str(&format!("$body->append({});\n", php_quote(&body)));
            output.push_str("$request->setBody($body);\n");
        }
        output.push('\n');

        if !request.query.is_empty() {
            output.push_str("$request->setQuery(new http\\QueryString([\n");
            let entries = request
                .query
                .iter()
                .map(|(name, value)| format!("  {} => {}", php_quote(name), php_quote(value)))
                .collect::<Vec<_>>()
                .join(",\n");
            output.push_str(&entries);
            output.push_str("\n]));\n\n");
        }

        if !request.headers.is_empty() {
            output.push_str("$request->setHeaders([\n");
            let entries = request
                .headers
                .iter()
                .map(|(name, value)| format!("  {} => {}", php_quote(name), php_quote(value)))
                .collect::<Vec<_>>()
                .join(",\n");
            output.push_str(&entries);
            output.push_str("\n]);\n\n");
        }

        output.push_str("$client->enqueue($request)->send();\n");
        output.push_str("$response = $client->getResponse();\n\n");
        output.push_str("echo $response->getBody();");

        output
    }
}
