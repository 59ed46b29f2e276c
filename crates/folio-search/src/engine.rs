//! Weighted relevance search over blog posts and projects.
//!
//! Each searchable field is scored against the lowercased query:
//!
//! | Match | Score |
//! |-------|-------|
//! | field starts with the whole query | +10 |
//! | field contains the whole query | +5 |
//! | field starts with a query word (len > 1) | +3 per word |
//! | field contains a query word (len > 1) | +1 per word |
//! | nothing matched, fuzzy word match (len > 3) | +`fuzzy_bonus` per word |
//!
//! Field scores are multiplied by their weight and summed; featured items and
//! recent items are then boosted. Items scoring zero are dropped.

use std::cmp::Ordering;

use chrono::{NaiveDate, Utc};
use folio_content::ContentItem;
use folio_core::Collection;

use crate::fuzzy::fuzzy_score;
use crate::types::{MatchedField, SearchConfig, SearchResult};

/// A normalized query: the lowercased trimmed phrase and its words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub phrase: String,
    pub words: Vec<String>,
}

impl Query {
    /// Normalize a raw query. Returns `None` for empty or blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let phrase = raw.trim().to_lowercase();
        if phrase.is_empty() {
            return None;
        }
        let words = phrase.split_whitespace().map(String::from).collect();
        Some(Self { phrase, words })
    }
}

/// Relevance search engine.
#[derive(Debug, Clone)]
pub struct SearchEngine {
    config: SearchConfig,
    today: NaiveDate,
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl SearchEngine {
    /// Create an engine measuring recency against the current UTC date.
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            today: Utc::now().date_naive(),
        }
    }

    /// Measure recency against a fixed reference date.
    pub fn with_today(mut self, today: NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Search blog posts and projects.
    ///
    /// Results are ordered by descending score; equal scores are ordered by
    /// slug, then blog posts before projects. At most `max_results` results
    /// are returned. A blank query returns nothing.
    pub fn search(
        &self,
        query: &str,
        blogs: &[ContentItem],
        projects: &[ContentItem],
        max_results: usize,
    ) -> Vec<SearchResult> {
        let Some(query) = Query::parse(query) else {
            return Vec::new();
        };

        let mut results: Vec<SearchResult> = blogs
            .iter()
            .map(|item| (Collection::Blog, item))
            .chain(projects.iter().map(|item| (Collection::Project, item)))
            .filter_map(|(collection, item)| self.score_item(collection, item, &query))
            .collect();

        results.sort_by(compare_results);
        results.truncate(max_results);

        log::debug!(
            "Search {:?} matched {} items (limit {max_results})",
            query.phrase,
            results.len()
        );
        results
    }

    /// Search with the configured default limit.
    pub fn search_default(
        &self,
        query: &str,
        blogs: &[ContentItem],
        projects: &[ContentItem],
    ) -> Vec<SearchResult> {
        self.search(query, blogs, projects, self.config.default_limit)
    }

    /// Score one item, or `None` if nothing matched.
    pub fn score_item(
        &self,
        collection: Collection,
        item: &ContentItem,
        query: &Query,
    ) -> Option<SearchResult> {
        let labels = item.tags.join(" ");
        let fields = [
            (MatchedField::Title, item.title.as_str(), self.config.title_weight),
            (
                MatchedField::Description,
                item.description.as_str(),
                self.config.description_weight,
            ),
            (
                MatchedField::labels_of(collection),
                labels.as_str(),
                self.config.label_weight(collection),
            ),
        ];

        let mut score = 0.0;
        let mut matched_fields = Vec::new();
        for (field, text, weight) in fields {
            let field_score = self.text_match(text, query);
            if field_score > 0.0 {
                score += field_score * weight;
                matched_fields.push(field);
            }
        }

        if score <= 0.0 {
            return None;
        }

        if item.featured {
            score *= self.config.featured_boost(collection);
        }
        score *= 1.0 + self.recency_boost(item.date);

        Some(SearchResult {
            collection,
            item: item.clone(),
            score,
            matched_fields,
        })
    }

    /// Match score of one field's text against a query, before weighting.
    pub fn text_match(&self, text: &str, query: &Query) -> f64 {
        let text = text.to_lowercase();
        let mut score = 0.0;

        if text.starts_with(&query.phrase) {
            score += 10.0;
        } else if text.contains(&query.phrase) {
            score += 5.0;
        }

        for word in query.words.iter().filter(|w| w.chars().count() > 1) {
            if text.starts_with(word.as_str()) {
                score += 3.0;
            } else if text.contains(word.as_str()) {
                score += 1.0;
            }
        }

        if score == 0.0 {
            for word in query.words.iter().filter(|w| w.chars().count() > 3) {
                if fuzzy_score(&text, word) > self.config.fuzzy_threshold {
                    score += self.config.fuzzy_bonus;
                }
            }
        }

        score
    }

    /// Recency boost for an item dated `date`.
    ///
    /// Linear from `recency_max_boost` today down to 0 at the end of the
    /// window. Future dates count as today.
    pub fn recency_boost(&self, date: NaiveDate) -> f64 {
        let window = f64::from(self.config.recency_window_days);
        if window <= 0.0 {
            return 0.0;
        }
        let days = (self.today - date).num_days().max(0) as f64;
        ((window - days) / window * self.config.recency_max_boost).max(0.0)
    }
}

fn compare_results(a: &SearchResult, b: &SearchResult) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.item.slug.cmp(&b.item.slug))
        .then_with(|| a.collection.cmp(&b.collection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_content::ItemDetails;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn item(collection: Collection, slug: &str, title: &str, description: &str, tags: &[&str]) -> ContentItem {
        ContentItem {
            slug: slug.to_string(),
            collection,
            title: title.to_string(),
            description: description.to_string(),
            date: date("2020-01-01"),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            published: true,
            featured: false,
            image: None,
            reading_time: 1,
            word_count: 0,
            headings: vec![],
            details: ItemDetails::empty(collection),
        }
    }

    fn engine() -> SearchEngine {
        SearchEngine::default().with_today(date("2024-06-01"))
    }

    fn q(raw: &str) -> Query {
        Query::parse(raw).unwrap()
    }

    // ------------------------------------------------------------------------
    // Query parsing
    // ------------------------------------------------------------------------

    #[test]
    fn test_query_parse() {
        let query = q("  Rust  Async ");
        assert_eq!(query.phrase, "rust  async");
        assert_eq!(query.words, vec!["rust", "async"]);
        assert!(Query::parse("   ").is_none());
        assert!(Query::parse("").is_none());
    }

    // ------------------------------------------------------------------------
    // text_match tiers
    // ------------------------------------------------------------------------

    #[test]
    fn test_phrase_prefix() {
        // phrase prefix +10, word "rust" prefix +3
        assert_eq!(engine().text_match("Rust tips", &q("rust")), 13.0);
    }

    #[test]
    fn test_phrase_contains() {
        // phrase contains +5, word contains +1
        assert_eq!(engine().text_match("Learning Rust", &q("rust")), 6.0);
    }

    #[test]
    fn test_multi_word_query() {
        // phrase absent; "async" prefix +3, "rust" contains +1
        assert_eq!(engine().text_match("Async in Rust", &q("async rust")), 4.0);
    }

    #[test]
    fn test_single_char_words_ignored() {
        // phrase "a" contained (+5) but the word itself is too short
        assert_eq!(engine().text_match("bat", &q("a")), 5.0);
    }

    #[test]
    fn test_fuzzy_fallback() {
        assert_eq!(engine().text_match("Svelte components", &q("svelta")), 0.5);
    }

    #[test]
    fn test_fuzzy_needs_long_words() {
        assert_eq!(engine().text_match("cat", &q("cay")), 0.0);
    }

    #[test]
    fn test_fuzzy_skipped_when_exact_matched() {
        // "rust" matches exactly, "servr" would fuzzy-match but is not tried
        assert_eq!(engine().text_match("rust server", &q("rust servr")), 3.0);
    }

    // ------------------------------------------------------------------------
    // Boosts
    // ------------------------------------------------------------------------

    #[test]
    fn test_recency_boost() {
        let engine = engine();
        assert!((engine.recency_boost(date("2024-06-01")) - 0.1).abs() < 1e-12);
        assert_eq!(engine.recency_boost(date("2020-01-01")), 0.0);
        // future dates are clamped to today
        assert!((engine.recency_boost(date("2025-01-01")) - 0.1).abs() < 1e-12);
        let half = engine.recency_boost(date("2024-06-01") - chrono::Duration::days(182));
        assert!(half > 0.049 && half < 0.051);
    }

    #[test]
    fn test_featured_boost_differs_by_collection() {
        let engine = engine();
        let query = q("folio");
        let mut blog = item(Collection::Blog, "b", "Folio", "", &[]);
        let mut project = item(Collection::Project, "p", "Folio", "", &[]);
        blog.featured = true;
        project.featured = true;

        let blog_score = engine.score_item(Collection::Blog, &blog, &query).unwrap().score;
        let project_score = engine
            .score_item(Collection::Project, &project, &query)
            .unwrap()
            .score;
        assert!((blog_score - 13.0 * 10.0 * 1.2).abs() < 1e-9);
        assert!((project_score - 13.0 * 10.0 * 1.3).abs() < 1e-9);
    }

    // ------------------------------------------------------------------------
    // search
    // ------------------------------------------------------------------------

    #[test]
    fn test_empty_query_returns_nothing() {
        let blogs = vec![item(Collection::Blog, "a", "Anything", "", &[])];
        assert!(engine().search("", &blogs, &[], 10).is_empty());
        assert!(engine().search("   ", &blogs, &[], 10).is_empty());
    }

    #[test]
    fn test_zero_score_items_dropped() {
        let blogs = vec![
            item(Collection::Blog, "a", "Rust", "", &[]),
            item(Collection::Blog, "b", "Gardening", "", &[]),
        ];
        let results = engine().search("rust", &blogs, &[], 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].item.slug, "a");
    }

    #[test]
    fn test_title_prefix_beats_tag_only() {
        let blogs = vec![
            item(Collection::Blog, "tagged", "Notes", "", &["rust"]),
            item(Collection::Blog, "titled", "Rust for beginners", "", &[]),
        ];
        let results = engine().search("rust", &blogs, &[], 10);
        assert_eq!(results[0].item.slug, "titled");
        assert_eq!(results[0].matched_fields, vec![MatchedField::Title]);
        assert_eq!(results[1].matched_fields, vec![MatchedField::Tags]);
    }

    #[test]
    fn test_matched_fields_use_collection_label() {
        let projects = vec![item(Collection::Project, "p", "Site", "A rust site", &["Rust"])];
        let results = engine().search("rust", &[], &projects, 10);
        assert_eq!(
            results[0].matched_fields,
            vec![MatchedField::Description, MatchedField::Technologies]
        );
        assert_eq!(results[0].collection, Collection::Project);
    }

    #[test]
    fn test_ties_by_slug_then_collection() {
        let blogs = vec![
            item(Collection::Blog, "zeta", "Rust", "", &[]),
            item(Collection::Blog, "alpha", "Rust", "", &[]),
        ];
        let projects = vec![item(Collection::Project, "alpha", "Rust", "", &[])];
        let results = engine().search("rust", &blogs, &projects, 10);

        let order: Vec<(Collection, &str)> = results
            .iter()
            .map(|r| (r.collection, r.item.slug.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                (Collection::Blog, "alpha"),
                (Collection::Project, "alpha"),
                (Collection::Blog, "zeta"),
            ]
        );
    }

    #[test]
    fn test_results_truncated_and_sorted() {
        let blogs: Vec<ContentItem> = (0..20)
            .map(|i| {
                let title = if i % 2 == 0 { "Rust guide" } else { "A guide to rust" };
                item(Collection::Blog, &format!("post-{i:02}"), title, "", &[])
            })
            .collect();
        let results = engine().search("rust", &blogs, &[], 5);
        assert_eq!(results.len(), 5);
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
        assert_eq!(engine().search_default("rust", &blogs, &[]).len(), 10);
    }
}
