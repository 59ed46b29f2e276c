//! Content commands: listing, lookup, search, and SEO output.
//!
//! Each command renders its output to a `String`; [`crate::app`] prints it.

use std::fmt::Write as _;

use folio_content::markdown::reading_time_estimates;
use folio_content::{
    ContentDocument, ContentItem, ContentRepository, FEATURED_ITEMS_LIMIT, estimate_reading_time,
    strip_frontmatter,
};
use folio_core::{Collection, Error, Result};
use folio_search::{DEFAULT_SUGGESTIONS, SearchEngine, SearchResult, related, search_suggestions};
use folio_seo::{SeoData, SiteConfig, generate_meta_tags, item_structured_data, sitemap_entries, sitemap_xml};

// ============================================================================
// Collections
// ============================================================================

/// `folio list <collection>`
///
/// With `featured`, only the first [`FEATURED_ITEMS_LIMIT`] featured items.
pub async fn list(repository: &ContentRepository, collection: Collection, featured: bool) -> String {
    let (items, kind) = if featured {
        let items = repository
            .list_featured(collection, FEATURED_ITEMS_LIMIT)
            .await;
        (items, "featured")
    } else {
        (repository.list_collection(collection).await, "published")
    };
    if items.is_empty() {
        return format!("No {kind} items in {}", collection.dir_name());
    }
    render_items(&items)
}

/// `folio show <collection> <slug>`
pub async fn show(repository: &ContentRepository, collection: Collection, slug: &str) -> Result<String> {
    let doc = get_document(repository, collection, slug).await?;
    Ok(render_document(&doc))
}

/// `folio related <collection> <slug>`
pub async fn related_items(
    repository: &ContentRepository,
    collection: Collection,
    slug: &str,
) -> Result<String> {
    let doc = get_document(repository, collection, slug).await?;
    let corpus = repository.list_collection(collection).await;
    let items = related(slug, &doc.item.tags, &corpus);
    if items.is_empty() {
        return Ok(format!("Nothing related to {collection}/{slug}"));
    }
    Ok(render_items(&items))
}

async fn get_document(
    repository: &ContentRepository,
    collection: Collection,
    slug: &str,
) -> Result<ContentDocument> {
    repository
        .get_item(collection, slug)
        .await
        .ok_or_else(|| Error::not_found(format!("{collection}/{slug}")))
}

fn render_items(items: &[ContentItem]) -> String {
    let width = items.iter().map(|i| i.slug.len()).max().unwrap_or(0);
    let mut out = String::new();
    for item in items {
        let _ = write!(
            out,
            "{}  {:<width$}  {} ({} min read)",
            item.date_string(),
            item.slug,
            item.title,
            item.reading_time
        );
        if item.featured {
            out.push_str(" *");
        }
        out.push('\n');
    }
    out
}

fn render_document(doc: &ContentDocument) -> String {
    let item = &doc.item;
    let mut out = String::new();
    let _ = writeln!(out, "{}", item.title);
    let _ = writeln!(
        out,
        "{} | {} | {} min read | {} words",
        item.path(),
        item.date_string(),
        item.reading_time,
        item.word_count
    );
    if !item.tags.is_empty() {
        let _ = writeln!(out, "{}: {}", item.collection.label_field(), item.tags.join(", "));
    }
    if let Some(category) = item.category() {
        let _ = writeln!(out, "category: {category}");
    }
    if !item.description.is_empty() {
        let _ = writeln!(out, "\n{}", item.description);
    }
    if !item.headings.is_empty() {
        out.push_str("\nOutline:\n");
        for heading in &item.headings {
            let indent = "  ".repeat(usize::from(heading.level.saturating_sub(1)));
            let _ = writeln!(out, "{indent}- {} (#{})", heading.text, heading.id);
        }
    }
    let _ = write!(out, "\n---\n{}", doc.body);
    out
}

// ============================================================================
// Search
// ============================================================================

/// `folio search <query>`
///
/// Suggests label terms when nothing matches.
pub async fn search(
    repository: &ContentRepository,
    engine: &SearchEngine,
    query: &str,
    limit: Option<usize>,
) -> String {
    let (blogs, projects) = tokio::join!(
        repository.list_collection(Collection::Blog),
        repository.list_collection(Collection::Project),
    );
    let limit = limit.unwrap_or(engine.config().default_limit);
    let results = engine.search(query, &blogs, &projects, limit);

    if results.is_empty() {
        let suggestions = search_suggestions(
            &blogs,
            &projects,
            &engine.config().suggestion_terms,
            DEFAULT_SUGGESTIONS,
        );
        let mut out = format!("No results for {query:?}");
        if !suggestions.is_empty() {
            let _ = write!(out, "\nTry: {}", suggestions.join(", "));
        }
        return out;
    }
    render_results(&results)
}

fn render_results(results: &[SearchResult]) -> String {
    let mut out = String::new();
    for (rank, result) in results.iter().enumerate() {
        let fields: Vec<&str> = result.matched_fields.iter().map(|f| f.as_str()).collect();
        let _ = writeln!(
            out,
            "{:>2}. [{}] {} ({})  score {:.2}  matched: {}",
            rank + 1,
            result.collection,
            result.item.title,
            result.item.slug,
            result.score,
            fields.join(", ")
        );
    }
    out
}

// ============================================================================
// SEO
// ============================================================================

/// `folio meta <collection> <slug>`: meta tags followed by JSON-LD.
pub async fn meta(
    repository: &ContentRepository,
    site: &SiteConfig,
    collection: Collection,
    slug: &str,
) -> Result<String> {
    let doc = get_document(repository, collection, slug).await?;
    let tags = generate_meta_tags(&SeoData::for_item(&doc.item), site);
    let json_ld = serde_json::to_string_pretty(&item_structured_data(&doc.item, site))
        .map_err(|e| Error::serialization(e.to_string()))?;

    let mut out = String::new();
    for (key, value) in tags.iter() {
        let _ = writeln!(out, "{key}: {value}");
    }
    let _ = write!(out, "\n{json_ld}");
    Ok(out)
}

/// `folio sitemap`
pub async fn sitemap(repository: &ContentRepository, site: &SiteConfig) -> String {
    let (blogs, projects) = tokio::join!(
        repository.list_collection(Collection::Blog),
        repository.list_collection(Collection::Project),
    );
    sitemap_xml(&sitemap_entries(&blogs, &projects), site)
}

// ============================================================================
// Reading time
// ============================================================================

/// `folio reading-time <file>`: estimate for a raw markdown document.
///
/// Frontmatter is excluded from the count.
pub fn reading_time(raw: &str, words_per_minute: u32) -> String {
    let body = strip_frontmatter(raw);
    let estimate = estimate_reading_time(body, words_per_minute);
    let estimates = reading_time_estimates(body);
    format!(
        "{} ({} words at {} wpm)\nslow: {}\naverage: {}\nfast: {}",
        estimate,
        estimate.words,
        words_per_minute,
        estimates.slow,
        estimates.average,
        estimates.fast
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio_content::MemoryDocumentSource;
    use folio_search::SearchConfig;
    use std::sync::Arc;

    fn repository() -> ContentRepository {
        let source = MemoryDocumentSource::new()
            .with_document(
                Collection::Blog,
                "async-rust",
                "---\ntitle: Async Rust\ndate: 2024-03-01\ntags: [rust, async]\ncategory: Engineering\nfeatured: true\npublished: true\n---\n\n# Async Rust\n\nFutures all the way down.\n\n## Executors\n\nPolling.\n",
            )
            .with_document(
                Collection::Blog,
                "rust-web",
                "---\ntitle: Rust on the Web\ndate: 2024-01-15\ntags: [rust, web]\npublished: true\n---\n\nServing pages.\n",
            )
            .with_document(
                Collection::Project,
                "folio",
                "---\ntitle: Folio\ndate: 2023-06-01\ntechnologies: [Rust, axum]\npublished: true\n---\n\nA portfolio engine.\n",
            );
        ContentRepository::new(Arc::new(source))
    }

    fn engine() -> SearchEngine {
        SearchEngine::new(SearchConfig::default())
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    // ------------------------------------------------------------------------
    // Collections
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let out = list(&repository(), Collection::Blog, false).await;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("2024-03-01  async-rust"));
        assert!(lines[0].ends_with("(1 min read) *"));
        assert!(lines[1].starts_with("2024-01-15  rust-web  "));
    }

    #[tokio::test]
    async fn test_list_empty_collection() {
        let repo = ContentRepository::new(Arc::new(MemoryDocumentSource::new()));
        assert_eq!(list(&repo, Collection::Project, false).await, "No published items in projects");
    }

    #[tokio::test]
    async fn test_list_featured_only() {
        let out = list(&repository(), Collection::Blog, true).await;
        assert_eq!(out.lines().count(), 1);
        assert!(out.starts_with("2024-03-01  async-rust"));

        let out = list(&repository(), Collection::Project, true).await;
        assert_eq!(out, "No featured items in projects");
    }

    #[tokio::test]
    async fn test_show_renders_outline_and_body() {
        let out = show(&repository(), Collection::Blog, "async-rust").await.unwrap();
        assert!(out.starts_with("Async Rust\n/blog/async-rust | 2024-03-01"));
        assert!(out.contains("tags: rust, async"));
        assert!(out.contains("category: Engineering"));
        assert!(out.contains("- Async Rust (#async-rust)"));
        assert!(out.contains("  - Executors (#executors)"));
        assert!(out.contains("\n---\n"));
        assert!(out.trim_end().ends_with("Polling."));
    }

    #[tokio::test]
    async fn test_show_missing_item_is_not_found() {
        let err = show(&repository(), Collection::Project, "async-rust")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_related_items() {
        let out = related_items(&repository(), Collection::Blog, "async-rust")
            .await
            .unwrap();
        assert!(out.contains("rust-web"));
        assert!(!out.contains("async-rust"));

        let out = related_items(&repository(), Collection::Project, "folio")
            .await
            .unwrap();
        assert_eq!(out, "Nothing related to project/folio");
    }

    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_search_renders_ranked_results() {
        let out = search(&repository(), &engine(), "rust", None).await;
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with(" 1. "));
        assert!(out.contains("[project] Folio (folio)"));
    }

    #[tokio::test]
    async fn test_search_limit() {
        let out = search(&repository(), &engine(), "rust", Some(1)).await;
        assert_eq!(out.lines().count(), 1);
    }

    #[tokio::test]
    async fn test_search_no_results_suggests_terms() {
        let out = search(&repository(), &engine(), "zzzz", None).await;
        assert_eq!(out, "No results for \"zzzz\"\nTry: rust, async, web, axum, react");
    }

    // ------------------------------------------------------------------------
    // SEO
    // ------------------------------------------------------------------------

    #[tokio::test]
    async fn test_meta_output() {
        let site = SiteConfig {
            url: "https://folio.test".into(),
            ..Default::default()
        };
        let out = meta(&repository(), &site, Collection::Blog, "async-rust")
            .await
            .unwrap();
        assert!(out.starts_with("title: Async Rust\n"));
        assert!(out.contains("og:type: article"));
        assert!(out.contains("canonical: https://folio.test/blog/async-rust"));
        assert!(out.contains("\"@type\": \"BlogPosting\""));
    }

    #[tokio::test]
    async fn test_sitemap_output() {
        let site = SiteConfig {
            url: "https://folio.test".into(),
            ..Default::default()
        };
        let xml = sitemap(&repository(), &site).await;
        assert!(xml.starts_with("<?xml"));
        assert!(xml.contains("<loc>https://folio.test/projects/folio</loc>"));
    }

    // ------------------------------------------------------------------------
    // Reading time
    // ------------------------------------------------------------------------

    #[test]
    fn test_reading_time_excludes_frontmatter() {
        let words = vec!["word"; 400].join(" ");
        let raw = format!("---\ntitle: Long Title With Many Words\n---\n{words}\n");

        let out = reading_time(&raw, 200);
        assert!(out.starts_with("2 min read (400 words at 200 wpm)"));
        assert!(out.contains("slow: 3 min read"));
        assert!(out.contains("fast: 2 min read"));
    }

    #[test]
    fn test_reading_time_custom_speed() {
        let words = vec!["word"; 400].join(" ");
        assert!(reading_time(&words, 100).starts_with("4 min read"));
    }
}
