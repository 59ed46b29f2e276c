//! Identifier utilities.
//!
//! Two kinds of identifiers flow through the pipeline:
//!
//! - **Slugs** come from file names and address a content item. They are
//!   validated, never rewritten: `Hello_World.md` has the slug `Hello_World`.
//! - **Heading ids** are anchors derived from heading text. Any consumer that
//!   links to a heading (a table of contents, a renderer adding `id=`
//!   attributes) must use [`heading_id`] so both sides agree.

use std::path::Path;

/// Maximum accepted slug length, in bytes.
pub const MAX_SLUG_LENGTH: usize = 100;

/// Check whether a slug is well-formed.
///
/// A valid slug is non-empty, at most [`MAX_SLUG_LENGTH`] long, and made of
/// ASCII letters, digits, `-` and `_` only.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::is_valid_slug;
///
/// assert!(is_valid_slug("getting-started_2024"));
/// assert!(!is_valid_slug("../etc/passwd"));
/// assert!(!is_valid_slug(""));
/// ```
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug.len() <= MAX_SLUG_LENGTH
        && slug
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}

/// Derive a slug from a content file path.
///
/// The slug is the file name with its extension stripped. Returns `None` if the
/// path has no stem or the stem is not a valid slug.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use folio_core::util::ids::slug_from_path;
///
/// assert_eq!(
///     slug_from_path(Path::new("content/blogs/hello-world.md")),
///     Some("hello-world".to_string())
/// );
/// assert_eq!(slug_from_path(Path::new("content/blogs/bad name.md")), None);
/// ```
pub fn slug_from_path(path: &Path) -> Option<String> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| is_valid_slug(s))
        .map(String::from)
}

/// Generate a URL-friendly anchor id from heading text.
///
/// 1. Lowercase
/// 2. Drop everything except `a-z`, `0-9`, whitespace and `-`
/// 3. Replace whitespace runs with `-`
/// 4. Collapse repeated `-`
/// 5. Trim leading and trailing `-`
///
/// Identical headings produce identical ids; collisions are not de-duplicated.
///
/// # Examples
///
/// ```
/// use folio_core::util::ids::heading_id;
///
/// assert_eq!(heading_id("Getting Started!"), "getting-started");
/// assert_eq!(heading_id("  What's new in v2.0?  "), "whats-new-in-v20");
/// assert_eq!(heading_id("--Pros -- Cons--"), "pros-cons");
/// ```
pub fn heading_id(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || *c == '-')
        .collect();

    let hyphenated = kept.split_whitespace().collect::<Vec<_>>().join("-");

    let mut id = String::with_capacity(hyphenated.len());
    for c in hyphenated.chars() {
        if c == '-' && id.ends_with('-') {
            continue;
        }
        id.push(c);
    }

    id.trim_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // is_valid_slug tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_valid_slugs() {
        assert!(is_valid_slug("hello"));
        assert!(is_valid_slug("Hello_World-2"));
        assert!(is_valid_slug("a"));
    }

    #[test]
    fn test_invalid_slug_characters() {
        assert!(!is_valid_slug("hello world"));
        assert!(!is_valid_slug("hello.md"));
        assert!(!is_valid_slug("../secret"));
        assert!(!is_valid_slug("café"));
    }

    #[test]
    fn test_slug_length_bound() {
        assert!(is_valid_slug(&"a".repeat(MAX_SLUG_LENGTH)));
        assert!(!is_valid_slug(&"a".repeat(MAX_SLUG_LENGTH + 1)));
    }

    // -------------------------------------------------------------------------
    // slug_from_path tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_slug_from_path_keeps_case() {
        let path = Path::new("/content/blogs/Rust_Tips.md");
        assert_eq!(slug_from_path(path), Some("Rust_Tips".to_string()));
    }

    #[test]
    fn test_slug_from_path_rejects_invalid_stem() {
        assert_eq!(slug_from_path(Path::new("/content/blogs/my post.md")), None);
        assert_eq!(slug_from_path(Path::new("/")), None);
    }

    // -------------------------------------------------------------------------
    // heading_id tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_heading_id_basic() {
        assert_eq!(heading_id("Getting Started!"), "getting-started");
        assert_eq!(heading_id("Introduction"), "introduction");
    }

    #[test]
    fn test_heading_id_strips_punctuation_and_unicode() {
        assert_eq!(heading_id("C++ & Rust: a comparison"), "c-rust-a-comparison");
        assert_eq!(heading_id("Café au lait"), "caf-au-lait");
    }

    #[test]
    fn test_heading_id_collapses_hyphens() {
        assert_eq!(heading_id("a - b"), "a-b");
        assert_eq!(heading_id("step---one"), "step-one");
    }

    #[test]
    fn test_heading_id_empty_and_symbol_only() {
        assert_eq!(heading_id(""), "");
        assert_eq!(heading_id("!!!"), "");
        assert_eq!(heading_id(" - "), "");
    }

    #[test]
    fn test_heading_id_no_deduplication() {
        assert_eq!(heading_id("Setup"), heading_id("Setup"));
    }
}
