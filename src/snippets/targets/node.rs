//! Node + native `http`/`https` module renderer

use url::Url;

use crate::snippets::{SampleRequest, SnippetRenderer, targets::double_quoted};

pub struct NodeNativeRenderer;

impl SnippetRenderer for NodeNativeRenderer {
    fn render(&self, request: &SampleRequest) -> String {
        let full_url = request.full_url();
        let (module, hostname, port, path) = match Url::parse(&full_url) {
            Ok(url) => (
                if url.scheme() == "http" { "http" } else { "https" },
                url.host_str().unwrap_or("").to_string(),
                url.port()
                    .map(|p| p.to_string())
                    .unwrap_or_else(|| "null".to_string()),
                match url.query() {
                    Some(query) => format!("{}?{}", url.path(), query),
                    None => url.path().to_string(),
                },
            ),
            // Relative URL: no server to name, keep the path as-is.
            Err(_) => ("https", String::new(), "null".to_string(), full_url),
        };

        let mut output = String::new();
        output.push_str(&format!("const http = require({});\n\n", double_quoted(module)));
        output.push_str("const options = {\n");
        output.push_str(&format!("  \"method\": {},\n", double_quoted(&request.method)));
        output.push_str(&format!("  \"hostname\": {},\n", double_quoted(&hostname)));
        output.push_str(&format!("  \"port\": {port},\n"));
        output.push_str(&format!("  \"path\": {}", double_quoted(&path)));
        if request.headers.is_empty() {
            output.push('\n');
        } else {
            output.push_str(",\n  \"headers\": {\n");
            let headers = request
                .headers
                .iter()
                .map(|(name, value)| {
                    format!("    {}: {}", double_quoted(name), double_quoted(value))
                })
                .collect::<Vec<_>>()
                .join(",\n");
            output.push_str(&headers);
            output.push_str("\n  }\n");
        }
        output.push_str("};\n\n");

        output.push_str("const req = http.request(options, function (res) {\n");
        output.push_str("  const chunks = [];\n\n");
        output.push_str("  res.on(\"data\", function (chunk) {\n");
        output.push_str("    chunks.push(chunk);\n");
        output.push_str("  });\n\n");
        output.push_str("  res.on(\"end\", function () {\n");
        output.push_str("    const body = Buffer.concat(chunks);\n");
        output.push_str("    console.log(body.toString());\n");
        output.push_str("  });\n");
        output.push_str("});\n\n");

        if let Some(body) = request.body_text() {
            output.push_str(&format!("req.write(JSON.stringify({body}));\n"));
        }
        output.push_str("req.end();");

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_splits_url_into_options() {
        let request = SampleRequest {
            method: "POST".to_string(),
            url: "https://api.example.com/events/stripe".to_string(),
            query: vec![],
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(json!({ "id": "evt_1" })),
        };

        let rendered = NodeNativeRenderer.render(&request);
        assert!(rendered.starts_with("const http = require(\"https\");"));
        assert!(rendered.contains("\"method\": \"POST\""));
        assert!(rendered.contains("\"hostname\": \"api.example.com\""));
        assert!(rendered.contains("\"port\": null"));
        assert!(rendered.contains("\"path\": \"/events/stripe\""));
        assert!(rendered.contains("\"content-type\": \"application/json\""));
        assert!(rendered.contains("req.write(JSON.stringify({\"id\":\"evt_1\"}));"));
        assert!(rendered.ends_with("req.end();"));
    }

    #[test]
    fn test_render_keeps_query_in_path_and_explicit_port() {
        let request = SampleRequest {
            method: "GET".to_string(),
            url: "http://localhost:8080/agreements".to_string(),
            query: vec![("expand".to_string(), "recipient".to_string())],
            headers: vec![],
            body: None,
        };

        let rendered = NodeNativeRenderer.render(&request);
        assert!(rendered.contains("const http = require(\"http\");"));
        assert!(rendered.contains("\"port\": 8080"));
        assert!(rendered.contains("\"path\": \"/agreements?expand=recipient\""));
        assert!(!rendered.contains("req.write"));
    }
}
