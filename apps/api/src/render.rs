//! Markdown rendering for the analyzer's LLM output.
//!
//! The model's Markdown is converted with pulldown-cmark and then sanitized
//! with ammonia before it is embedded in a page. The LLM is a third party;
//! its output is never trusted as safe HTML.

use pulldown_cmark::{html, Options, Parser};

/// Converts LLM Markdown to sanitized HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut raw_html = String::new();
    html::push_html(&mut raw_html, parser);

    ammonia::clean(&raw_html)
}
