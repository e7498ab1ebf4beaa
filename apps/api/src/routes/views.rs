//! Server-rendered HTML pages.
//!
//! Pages are fixed shells with `{slot}` replacement, the same scheme the
//! prompt templates use. Everything user- or provider-supplied that lands in
//! a page goes through HTML escaping first (the analyzer results are already
//! sanitized by `render::markdown_to_html`).

use axum::response::Html;
use serde::Deserialize;

/// Flash message carried across a redirect as query parameters. Stateless by
/// design: no session, no cookie, no signing secret.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
    pub category: Option<String>,
}

const PAGE_SHELL: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title} — Resume Coach</title>
  <style>
    body { font-family: system-ui, sans-serif; max-width: 52rem; margin: 2rem auto; padding: 0 1rem; color: #1a202c; }
    label { display: block; margin-top: 0.8rem; font-weight: 600; }
    input, textarea { width: 100%; padding: 0.4rem; margin-top: 0.2rem; box-sizing: border-box; }
    textarea { min-height: 4.5rem; }
    button { margin-top: 1.2rem; padding: 0.5rem 1.4rem; font-size: 1rem; }
    pre { background: #f7fafc; border: 1px solid #e2e8f0; padding: 1rem; overflow-x: auto; white-space: pre-wrap; }
    .alert-danger { background: #fff5f5; border: 1px solid #fc8181; color: #742a2a; padding: 0.7rem 1rem; margin-bottom: 1rem; }
    .alert-info { background: #ebf8ff; border: 1px solid #63b3ed; color: #2a4365; padding: 0.7rem 1rem; margin-bottom: 1rem; }
    nav a { margin-right: 1rem; }
  </style>
</head>
<body>
  <nav><a href="/">Home</a><a href="/builder">Builder</a><a href="/analyzer">Analyzer</a></nav>
  <h1>{title}</h1>
{body}
</body>
</html>
"#;

pub fn page(title: &str, body: &str) -> Html<String> {
    Html(
        PAGE_SHELL
            .replace("{title}", &html_escape::encode_text(title))
            .replace("{body}", body),
    )
}

/// Renders the flash banner, or nothing when the query carries no message.
pub fn flash_banner(query: &FlashQuery) -> String {
    match &query.flash {
        Some(message) => {
            let category = query.category.as_deref().unwrap_or("info");
            let class = match category {
                "danger" => "alert-danger",
                _ => "alert-info",
            };
            format!(
                "<div class=\"{class}\">{}</div>\n",
                html_escape::encode_text(message)
            )
        }
        None => String::new(),
    }
}

pub fn home_page() -> Html<String> {
    page(
        "Home",
        "<p>Build a polished resume or get scored feedback on an existing one.</p>\n\
         <ul>\n\
           <li><a href=\"/builder\">Resume Builder</a> — turn your details into a RenderCV YAML config.</li>\n\
           <li><a href=\"/analyzer\">Resume Analyzer</a> — upload a PDF or DOCX and get coached feedback.</li>\n\
         </ul>",
    )
}

pub fn builder_page(flash: &str, yaml: Option<&str>) -> Html<String> {
    let mut body = String::from(flash);
    body.push_str(
        r#"<form method="post" action="/builder">
  <label>Name <input type="text" name="name"></label>
  <label>Email <input type="text" name="email"></label>
  <label>Phone <input type="text" name="phone"></label>
  <label>LinkedIn <input type="text" name="linkedin"></label>
  <label>GitHub <input type="text" name="github"></label>
  <label>Education <textarea name="education"></textarea></label>
  <label>Experience <textarea name="experience"></textarea></label>
  <label>Projects <textarea name="projects"></textarea></label>
  <label>Skills <textarea name="skills"></textarea></label>
  <label>Interests <textarea name="interests"></textarea></label>
  <label>Languages <textarea name="languages"></textarea></label>
  <button type="submit">Generate YAML</button>
</form>
"#,
    );
    if let Some(yaml) = yaml {
        body.push_str("<h2>Generated YAML</h2>\n<pre>");
        body.push_str(&html_escape::encode_text(yaml));
        body.push_str("</pre>\n");
    }
    page("Resume Builder", &body)
}

/// `results` must already be sanitized HTML; it is embedded verbatim.
pub fn analyzer_page(flash: &str, results: Option<&str>) -> Html<String> {
    let mut body = String::from(flash);
    body.push_str(
        r#"<form method="post" action="/analyzer" enctype="multipart/form-data">
  <label>Resume file (PDF or DOCX, max 16 MB)
    <input type="file" name="resume_file" accept=".pdf,.docx">
  </label>
  <button type="submit">Analyze Resume</button>
</form>
"#,
    );
    if let Some(results) = results {
        body.push_str("<h2>Analysis</h2>\n<div>");
        body.push_str(results);
        body.push_str("</div>\n");
    }
    page("Resume Analyzer", &body)
}
