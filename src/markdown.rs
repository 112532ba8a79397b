//! The Markdown-to-HTML capability. Everything beyond the conversion itself
//! (title extraction, templating) lives elsewhere; this module only pins
//! down the extension set post bodies are allowed to use.

use pulldown_cmark::{html, Options, Parser};

/// Converts Markdown to HTML with the extended feature set: tables,
/// footnotes, strikethrough, and task lists. Fenced code blocks are part of
/// the base feature set and always on.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let mut html = String::new();
    html::push_html(&mut html, Parser::new_ext(markdown, options));
    html
}
