use crate::domain::ports::Storage;
use crate::utils::error::Result;
use serde_json::Value;

const SPEC_PLACEHOLDER: &str = "__OPENAPI_SPEC__";

const HTML_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta http-equiv="content-type" content="text/html; charset=UTF-8">
    <title>VisioLab Menu Import API</title>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="shortcut icon" href="https://uploads-ssl.webflow.com/610e8d4e5e20c21539aec950/612686a1377160481ec27630_Favicon.png">
    <style>
        body {
            margin: 0;
            padding: 0;
        }
    </style>
    <style data-styled="" data-styled-version="4.4.1"></style>
</head>
<body>
    <div id="redoc-container"></div>
    <script src="https://cdn.jsdelivr.net/npm/redoc/bundles/redoc.standalone.js"> </script>
    <script>
        const spec = __OPENAPI_SPEC__;
        Redoc.init(spec, {}, document.getElementById("redoc-container"));
    </script>
</body>
</html>
"#;

pub const INDEX_FILE: &str = "index.html";

/// Renders the ReDoc page with the document inlined as a JS object literal.
pub fn render_html(document: &Value) -> Result<String> {
    // "</" inside a <script> block would end it early
    let spec = serde_json::to_string(document)?.replace("</", "<\\/");
    Ok(HTML_TEMPLATE.replace(SPEC_PLACEHOLDER, &spec))
}

/// Writes the rendered documentation page through a [`Storage`].
pub struct DocsExporter<S: Storage> {
    storage: S,
}

impl<S: Storage> DocsExporter<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub async fn export(&self, document: &Value) -> Result<String> {
        let html = render_html(document)?;
        let path = self.storage.write_file(INDEX_FILE, html.as_bytes()).await?;
        tracing::info!("📁 Documentation written to {} ({} bytes)", path, html.len());
        Ok(path)
    }
}
