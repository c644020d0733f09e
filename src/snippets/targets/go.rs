//! Go + native `net/http` renderer

use crate::snippets::{SampleRequest, SnippetRenderer, targets::double_quoted};

pub struct GoNativeRenderer;

impl SnippetRenderer for GoNativeRenderer {
    fn render(&self, request: &SampleRequest) -> String {
        let body = request.body_text();

        let mut imports = vec!["fmt", "io", "net/http"];
        if body.is_some() {
            imports.push("strings");
        }
        imports.sort_unstable();

        let mut output = String::new();
        output.push_str("package main\n\nimport (\n");
        for import in imports {
            output.push_str(&format!("\t{}\n", double_quoted(import)));
        }
        output.push_str(")\n\nfunc main() {\n\n");
        output.push_str(&format!("\turl := {}\n\n", double_quoted(&request.full_url())));

        if let Some(body) = &body {
            output.push_str(&format!(
                "\tpayload := strings.NewReader({})\n\n",
                double_quoted(body)
            ));
            output.push_str(&format!(
                "\treq, _ := http.NewRequest({}, url, payload)\n\n",
                double_quoted(&request.method)
            ));
        } else {
            output.push_str(&format!(
                "\treq, _ := http.NewRequest({}, url, nil)\n\n",
                double_quoted(&request.method)
            ));
        }

        for (name, value) in &request.headers {
            output.push_str(&format!(
                "\treq.Header.Add({}, {})\n",
                double_quoted(name),
                double_quoted(value)
            ));
        }
        if !request.headers.is_empty() {
            output.push('\n');
        }

        output.push_str("\tres, _ := http.DefaultClient.Do(req)\n\n");
        output.push_str("\tdefer res.Body.Close()\n");
        output.push_str("\tbody, _ := io.ReadAll(res.Body)\n\n");
        output.push_str("\tfmt.Println(res)\n");
        output.push_str("\tfmt.Println(string(body))\n\n");
        output.push_str("}");

        output
    }
}
