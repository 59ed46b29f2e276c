//! Heading outline extraction.
//!
//! Headings are found with a line-oriented scan rather than a full markdown
//! parse, so the outline is a pure function of the raw text: every line that
//! starts with 1-6 `#` characters followed by whitespace and at least one
//! more character becomes a [`Heading`], in document order. A heading that
//! is only whitespace (`"#   "`) is kept with empty text and an empty id.

use std::sync::LazyLock;

use folio_core::heading_id;
use regex::Regex;
use serde::{Deserialize, Serialize};

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)$").expect("Invalid heading regex"));

/// One entry of a document's heading outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Anchor id derived from the text; see [`folio_core::heading_id`].
    pub id: String,
    /// Heading text with the leading hashes removed.
    pub text: String,
    /// Heading level, 1 to 6.
    pub level: u8,
}

impl Heading {
    /// Build a heading, deriving its anchor id from `text`.
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: heading_id(&text),
            text,
            level,
        }
    }
}

/// Extract all headings from markdown text in document order.
///
/// Duplicate heading texts produce duplicate ids; no suffixes are added.
///
/// ```rust
/// use folio_content::markdown::extract_headings;
///
/// let headings = extract_headings("# Getting Started!\n\ntext\n\n## Install");
/// assert_eq!(headings.len(), 2);
/// assert_eq!(headings[0].id, "getting-started");
/// assert_eq!(headings[1].level, 2);
/// ```
pub fn extract_headings(content: &str) -> Vec<Heading> {
    content
        .lines()
        .filter_map(|line| {
            let caps = HEADING_RE.captures(line.trim_end_matches('\r'))?;
            let level = caps[1].len() as u8;
            Some(Heading::new(level, caps[2].trim()))
        })
        .collect()
}

/// Find the heading that best matches `text`.
///
/// Matching is case-insensitive and tiered: an exact match wins, then a
/// heading containing `text`, then a heading contained in `text`. Headings
/// with empty text never match.
pub fn find_heading_by_text<'a>(headings: &'a [Heading], text: &str) -> Option<&'a Heading> {
    let needle = text.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    let lowered: Vec<String> = headings.iter().map(|h| h.text.to_lowercase()).collect();

    let position = lowered
        .iter()
        .position(|h| *h == needle)
        .or_else(|| lowered.iter().position(|h| h.contains(&needle)))
        .or_else(|| {
            lowered
                .iter()
                .position(|h| !h.is_empty() && needle.contains(h.as_str()))
        });

    position.map(|i| &headings[i])
}
