//! Splitting a content document into its YAML frontmatter and markdown body.
//!
//! A document opens with a `---` line, then YAML fields, then a closing `---`
//! line. Everything after the closing line is the body:
//!
//! ```markdown
//! ---
//! title: Building a Blog in Rust
//! date: 2024-03-01
//! tags: [rust, markdown]
//! published: true
//! ---
//!
//! # Introduction
//! ```
//!
//! ```rust
//! use folio_content::markdown::extract_frontmatter;
//!
//! let doc = extract_frontmatter("---\ntitle: Test\n---\n\nBody");
//! assert!(doc.has_frontmatter());
//! assert_eq!(doc.body().trim(), "Body");
//! ```

use folio_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// A document split at its frontmatter block.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    /// Parsed YAML, absent when the block is missing or not valid YAML.
    fields: Option<Value>,
    body: &'a str,
}

impl<'a> Frontmatter<'a> {
    /// Whether a frontmatter block was found and parsed.
    pub fn has_frontmatter(&self) -> bool {
        self.fields.is_some()
    }

    /// The markdown after the closing delimiter, or the whole input when
    /// there is no complete block.
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Deserialize the fields into a collection schema.
    ///
    /// `Ok(None)` when there is no frontmatter; `Err` when the fields do not
    /// fit `T`.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        self.fields
            .clone()
            .map(serde_yaml::from_value)
            .transpose()
            .map_err(|e| Error::parse(format!("Frontmatter does not match schema: {e}")))
    }
}

/// Split `content` into frontmatter and body.
///
/// Without an opening `---` line or without a closing one, the whole input is
/// body. A block whose YAML does not parse is logged and dropped; the body
/// still starts after it.
///
/// ```rust
/// use folio_content::markdown::extract_frontmatter;
///
/// let doc = extract_frontmatter("# Just Markdown");
/// assert!(!doc.has_frontmatter());
/// assert_eq!(doc.body(), "# Just Markdown");
/// ```
pub fn extract_frontmatter(content: &str) -> Frontmatter<'_> {
    let Some((yaml, body)) = split_block(content) else {
        return Frontmatter {
            fields: None,
            body: content,
        };
    };

    let fields = serde_yaml::from_str::<Value>(yaml)
        .inspect_err(|e| log::warn!("Ignoring malformed frontmatter: {e}"))
        .ok();
    Frontmatter { fields, body }
}

/// The markdown body of `content`, frontmatter removed.
///
/// ```rust
/// use folio_content::markdown::strip_frontmatter;
///
/// assert_eq!(strip_frontmatter("---\ntitle: Test\n---\n\n# Heading").trim(), "# Heading");
/// ```
pub fn strip_frontmatter(content: &str) -> &str {
    extract_frontmatter(content).body()
}

/// `(yaml, body)` for a document opening with a closed `---` block.
fn split_block(content: &str) -> Option<(&str, &str)> {
    let (_, inner) = content.strip_prefix("---")?.split_once('\n')?;

    let (yaml, after) = match inner.strip_prefix("---") {
        Some(after) => ("", after),
        None => {
            let Some(close) = inner.find("\n---") else {
                log::warn!("Frontmatter is never closed; treating document as body");
                return None;
            };
            (&inner[..close], &inner[close + 4..])
        }
    };

    let body = after
        .strip_prefix("\r\n")
        .or_else(|| after.strip_prefix('\n'))
        .unwrap_or(after);
    Some((yaml, body))
}
