//! Markdown structure parsing with `pulldown-cmark`.
//!
//! Used to derive a fallback description from a document body when the
//! frontmatter does not provide one.
//!
//! ```rust
//! use folio_content::markdown::extract_first_paragraph;
//!
//! let content = "# My Title\n\nThis is the *first* paragraph.\n\n## Section";
//! let paragraph = extract_first_paragraph(content, 100).unwrap();
//! assert_eq!(paragraph, "This is the first paragraph.");
//! ```

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

const ELLIPSIS: &str = "...";

/// Extract the first non-empty paragraph as plain text.
///
/// Inline formatting is stripped and line breaks become spaces. The result is
/// truncated to at most `max_chars` characters (including a trailing `...`),
/// cutting at a word boundary when one is available.
pub fn extract_first_paragraph(content: &str, max_chars: usize) -> Option<String> {
    let mut in_paragraph = false;
    let mut paragraph_text = String::new();

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Paragraph) => {
                in_paragraph = true;
                paragraph_text.clear();
            }
            Event::End(TagEnd::Paragraph) if in_paragraph => {
                let normalized = normalize_whitespace(&paragraph_text);
                if !normalized.is_empty() {
                    return Some(truncate_text(&normalized, max_chars));
                }
                in_paragraph = false;
            }
            Event::Text(text) | Event::Code(text) if in_paragraph => {
                paragraph_text.push_str(&text);
            }
            Event::SoftBreak | Event::HardBreak if in_paragraph => {
                paragraph_text.push(' ');
            }
            _ => {}
        }
    }

    None
}

/// Truncate `text` to at most `max_chars` characters, ending with `...`.
///
/// Counts characters, not bytes, so multi-byte text never splits a code point.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }

    let budget = max_chars.saturating_sub(ELLIPSIS.len());
    let end = text
        .char_indices()
        .nth(budget)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let head = &text[..end];

    let cut = match head.rfind(char::is_whitespace) {
        Some(pos) if pos > 0 => &head[..pos],
        _ => head,
    };

    format!("{}{ELLIPSIS}", cut.trim_end())
}

fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
