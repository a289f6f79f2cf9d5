//! Static preview content for the code-editor showcase.

use ankied_core::PreviewTab;

const HTML_SAMPLE: &[&str] = &[
    "<!DOCTYPE html>",
    "<html lang=\"en\">",
    "  <head>",
    "    <meta charset=\"UTF-8\" />",
    "    <title>My Portfolio</title>",
    "  </head>",
    "  <body>",
    "    <h1>Built on my phone</h1>",
    "  </body>",
    "</html>",
];

const CSS_SAMPLE: &[&str] = &[
    ":root {",
    "  --accent: #43d9ad;",
    "}",
    "",
    "body {",
    "  margin: 0;",
    "  background: #0d1117;",
    "  color: var(--accent);",
    "  font-family: monospace;",
    "}",
];

const JS_SAMPLE: &[&str] = &[
    "const editor = new AnkiEditor(\"#app\");",
    "",
    "editor.on(\"save\", async (file) => {",
    "  await deploy(file);",
    "  console.log(`${file.name} is live`);",
    "});",
    "",
    "editor.open(\"index.html\");",
];

/// Code sample shown in the preview panel for a tab.
pub fn sample(tab: PreviewTab) -> &'static [&'static str] {
    match tab {
        PreviewTab::Html => HTML_SAMPLE,
        PreviewTab::Css => CSS_SAMPLE,
        PreviewTab::Js => JS_SAMPLE,
    }
}
