//! HTML output for human readers.
//!
//! Markdown is converted with CommonMark rules and no extensions. Raw HTML
//! inside a note's markdown is passed through as-is; nothing here sanitizes
//! scripts embedded in note content.

use pulldown_cmark::{html, Options, Parser};

mod landing;
mod note_page;

pub use landing::render_landing_page;
pub use note_page::render_note_page;

pub fn render_markdown(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Escape text for use in element content or a quoted attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
