//! Related-content recommendations by shared labels.

use std::cmp::Ordering;

use folio_content::ContentItem;

/// Maximum number of related items returned by [`related`].
pub const RELATED_ITEMS_LIMIT: usize = 4;

/// Items related to the one identified by `current_slug`.
///
/// Candidates are scored by how many of their labels appear in
/// `current_tags` (exact, case-sensitive). With no tags the most recent
/// items are returned instead. The current item is always excluded.
pub fn related(current_slug: &str, current_tags: &[String], corpus: &[ContentItem]) -> Vec<ContentItem> {
    related_with_limit(current_slug, current_tags, corpus, RELATED_ITEMS_LIMIT)
}

/// [`related`] with an explicit result cap.
pub fn related_with_limit(
    current_slug: &str,
    current_tags: &[String],
    corpus: &[ContentItem],
    limit: usize,
) -> Vec<ContentItem> {
    let candidates = corpus.iter().filter(|item| item.slug != current_slug);

    let mut scored: Vec<(usize, &ContentItem)> = if current_tags.is_empty() {
        candidates.map(|item| (0, item)).collect()
    } else {
        candidates
            .map(|item| {
                let shared = item.tags.iter().filter(|t| current_tags.contains(t)).count();
                (shared, item)
            })
            .collect()
    };

    scored.sort_by(|(sa, a), (sb, b)| compare(*sa, a, *sb, b));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, item)| item.clone())
        .collect()
}

fn compare(score_a: usize, a: &ContentItem, score_b: usize, b: &ContentItem) -> Ordering {
    score_b
        .cmp(&score_a)
        .then_with(|| b.date.cmp(&a.date))
        .then_with(|| a.slug.cmp(&b.slug))
}
