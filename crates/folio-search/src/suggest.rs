//! Search suggestions and match highlighting.

use std::collections::HashSet;

use folio_content::ContentItem;
use regex::RegexBuilder;

/// Default number of suggestions.
pub const DEFAULT_SUGGESTIONS: usize = 5;

/// Suggested search terms drawn from the labels of the content.
///
/// Blog tags come first, then project technologies, then `extra_terms`, all
/// lowercased and deduplicated in first-seen order. Labels of two characters
/// or fewer are skipped.
///
/// ```rust
/// use folio_search::search_suggestions;
///
/// let terms = search_suggestions(&[], &[], &["Tutorial".to_string()], 5);
/// assert_eq!(terms, vec!["tutorial"]);
/// ```
pub fn search_suggestions(
    blogs: &[ContentItem],
    projects: &[ContentItem],
    extra_terms: &[String],
    max: usize,
) -> Vec<String> {
    let labels = blogs
        .iter()
        .chain(projects)
        .flat_map(|item| item.tags.iter())
        .filter(|label| label.chars().count() > 2);

    let mut seen = HashSet::new();
    labels
        .chain(extra_terms)
        .map(|term| term.to_lowercase())
        .filter(|term| seen.insert(term.clone()))
        .take(max)
        .collect()
}

/// Wrap every case-insensitive occurrence of `term` in `<mark>` tags.
///
/// The term is matched literally. A blank term leaves the text unchanged.
///
/// ```rust
/// use folio_search::highlight_search_terms;
///
/// assert_eq!(
///     highlight_search_terms("Rust and rust", "RUST"),
///     "<mark>Rust</mark> and <mark>rust</mark>"
/// );
/// ```
pub fn highlight_search_terms(text: &str, term: &str) -> String {
    let term = term.trim();
    if term.is_empty() {
        return text.to_string();
    }

    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re.replace_all(text, "<mark>$0</mark>").into_owned(),
        Err(e) => {
            log::warn!("Failed to build highlight pattern for {term:?}: {e}");
            text.to_string()
        }
    }
}
