//! Metadata extraction: raw document text to [`ContentItem`].
//!
//! Each collection has its own frontmatter schema. Extraction is a pure
//! function of `(collection, slug, raw text)`, so a listing and a detail
//! lookup of the same document always agree on every derived field.

use folio_core::{Collection, Error, Result, is_valid_slug};
use serde::{Deserialize, Serialize};

use crate::item::{ContentDocument, ContentItem, ItemDetails, parse_content_date};
use crate::markdown::{
    DEFAULT_WORDS_PER_MINUTE, estimate_reading_time, extract_first_paragraph, extract_frontmatter,
    extract_headings,
};

/// Maximum length of a description derived from the body.
pub const MAX_DESCRIPTION_LENGTH: usize = 160;

/// Frontmatter schema for blog posts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogFrontmatter {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub badge: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
}

/// Frontmatter schema for projects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectFrontmatter {
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub demo: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub featured: bool,
}

/// Options controlling derived fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProcessingOptions {
    /// Reading speed for `reading_time`; 0 means the default.
    pub words_per_minute: u32,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            words_per_minute: DEFAULT_WORDS_PER_MINUTE,
        }
    }
}

/// Authored fields common to both schemas, after validation.
struct Authored {
    title: String,
    date: String,
    description: Option<String>,
    tags: Vec<String>,
    image: Option<String>,
    published: bool,
    featured: bool,
    details: ItemDetails,
}

impl From<BlogFrontmatter> for Authored {
    fn from(fm: BlogFrontmatter) -> Self {
        Self {
            title: fm.title,
            date: fm.date,
            description: fm.description,
            tags: fm.tags,
            image: fm.image,
            published: fm.published,
            featured: fm.featured,
            details: ItemDetails::Blog {
                category: fm.category,
                badge: fm.badge,
            },
        }
    }
}

impl From<ProjectFrontmatter> for Authored {
    fn from(fm: ProjectFrontmatter) -> Self {
        Self {
            title: fm.title,
            date: fm.date,
            description: fm.description,
            tags: fm.technologies,
            image: fm.image,
            published: fm.published,
            featured: fm.featured,
            details: ItemDetails::Project {
                github: fm.github,
                demo: fm.demo,
            },
        }
    }
}

/// Extract a document and its body, reporting why extraction failed.
///
/// Fails when the slug is malformed, the frontmatter is missing or does not
/// match the collection's schema, the title is empty, or the date is not in
/// a recognized form. Derived fields are computed from the body only;
/// authored `readingTime`, `wordCount`, or `headings` keys are ignored.
pub fn try_extract_document(
    collection: Collection,
    slug: &str,
    raw: &str,
    options: &ProcessingOptions,
) -> Result<ContentDocument> {
    if !is_valid_slug(slug) {
        return Err(Error::invalid_data(format!("Invalid slug: {slug:?}")));
    }

    let frontmatter = extract_frontmatter(raw);
    if !frontmatter.has_frontmatter() {
        return Err(Error::parse(format!("{collection}/{slug}: missing frontmatter")));
    }

    let authored: Authored = match collection {
        Collection::Blog => frontmatter.deserialize::<BlogFrontmatter>()?.map(Authored::from),
        Collection::Project => frontmatter
            .deserialize::<ProjectFrontmatter>()?
            .map(Authored::from),
    }
    .ok_or_else(|| Error::parse(format!("{collection}/{slug}: missing frontmatter")))?;

    let title = authored.title.trim().to_string();
    if title.is_empty() {
        return Err(Error::invalid_data(format!("{collection}/{slug}: empty title")));
    }
    let date = parse_content_date(&authored.date)?;

    let body = frontmatter.body();
    let reading = estimate_reading_time(body, options.words_per_minute);
    let description = authored
        .description
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
        .or_else(|| extract_first_paragraph(body, MAX_DESCRIPTION_LENGTH))
        .unwrap_or_default();

    let item = ContentItem {
        slug: slug.to_string(),
        collection,
        title,
        description,
        date,
        tags: authored.tags,
        published: authored.published,
        featured: authored.featured,
        image: authored.image,
        reading_time: reading.minutes,
        word_count: reading.words,
        headings: extract_headings(body),
        details: authored.details,
    };

    Ok(ContentDocument {
        item,
        body: body.to_string(),
    })
}

/// Extract a document, logging and discarding failures.
pub fn extract_document(
    collection: Collection,
    slug: &str,
    raw: &str,
    options: &ProcessingOptions,
) -> Option<ContentDocument> {
    match try_extract_document(collection, slug, raw, options) {
        Ok(doc) => Some(doc),
        Err(e) => {
            log::warn!("Skipping {collection}/{slug}: {e}");
            None
        }
    }
}

/// Extract only the item of a document.
///
/// ```rust
/// use folio_content::metadata::{extract_item, ProcessingOptions};
/// use folio_core::Collection;
///
/// let raw = "---\ntitle: Hello\ndate: 2024-01-01\npublished: true\n---\n\n# Hi\n\nSome words.";
/// let item = extract_item(Collection::Blog, "hello", raw, &ProcessingOptions::default()).unwrap();
/// assert_eq!(item.title, "Hello");
/// assert_eq!(item.description, "Some words.");
/// assert_eq!(item.headings[0].id, "hi");
/// ```
pub fn extract_item(
    collection: Collection,
    slug: &str,
    raw: &str,
    options: &ProcessingOptions,
) -> Option<ContentItem> {
    extract_document(collection, slug, raw, options).map(|doc| doc.item)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> ProcessingOptions {
        ProcessingOptions::default()
    }

    // ------------------------------------------------------------------------
    // Blog extraction
    // ------------------------------------------------------------------------

    const BLOG: &str = "---
title: Async Rust in Practice
date: 2024-02-10
description: Notes on tokio
tags: [rust, async]
category: engineering
badge: guide
published: true
featured: true
readingTime: 99
wordCount: 12345
---

# Async Rust

Some text about futures.

## Executors
";

    #[test]
    fn test_extract_blog_fields() {
        let item = extract_item(Collection::Blog, "async-rust", BLOG, &opts()).unwrap();

        assert_eq!(item.slug, "async-rust");
        assert_eq!(item.collection, Collection::Blog);
        assert_eq!(item.title, "Async Rust in Practice");
        assert_eq!(item.description, "Notes on tokio");
        assert_eq!(item.date_string(), "2024-02-10");
        assert_eq!(item.tags, vec!["rust", "async"]);
        assert!(item.published);
        assert!(item.featured);
        assert_eq!(item.category(), Some("engineering"));
        assert_eq!(
            item.details,
            ItemDetails::Blog {
                category: Some("engineering".into()),
                badge: Some("guide".into()),
            }
        );
    }

    #[test]
    fn test_derived_fields_ignore_authored_values() {
        let item = extract_item(Collection::Blog, "async-rust", BLOG, &opts()).unwrap();

        assert_eq!(item.reading_time, 1);
        assert_eq!(item.word_count, 7);
        let ids: Vec<&str> = item.headings.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["async-rust", "executors"]);
    }

    #[test]
    fn test_document_body_excludes_frontmatter() {
        let doc = extract_document(Collection::Blog, "async-rust", BLOG, &opts()).unwrap();
        assert!(doc.body.trim_start().starts_with("# Async Rust"));
        assert!(!doc.body.contains("readingTime"));
    }

    // ------------------------------------------------------------------------
    // Project extraction
    // ------------------------------------------------------------------------

    #[test]
    fn test_extract_project_fields() {
        let raw = "---
title: Folio
date: 2023-11-01T12:00:00Z
technologies: [Rust, axum]
github: https://github.com/example/folio
published: true
---

A portfolio engine.
";
        let item = extract_item(Collection::Project, "folio", raw, &opts()).unwrap();

        assert_eq!(item.tags, vec!["Rust", "axum"]);
        assert_eq!(item.date_string(), "2023-11-01");
        assert_eq!(item.description, "A portfolio engine.");
        assert!(!item.featured);
        assert_eq!(
            item.details,
            ItemDetails::Project {
                github: Some("https://github.com/example/folio".into()),
                demo: None,
            }
        );
    }

    // ------------------------------------------------------------------------
    // Defaults and rejection
    // ------------------------------------------------------------------------

    #[test]
    fn test_published_defaults_to_false() {
        let raw = "---\ntitle: Draft\ndate: 2024-01-01\n---\n\nBody";
        let item = extract_item(Collection::Blog, "draft", raw, &opts()).unwrap();
        assert!(!item.published);
    }

    #[test]
    fn test_blank_description_falls_back_to_body() {
        let raw = "---\ntitle: T\ndate: 2024-01-01\ndescription: \"  \"\n---\n\nFirst paragraph.";
        let item = extract_item(Collection::Blog, "t", raw, &opts()).unwrap();
        assert_eq!(item.description, "First paragraph.");
    }

    #[test]
    fn test_fallback_description_is_truncated() {
        let raw = format!("---\ntitle: T\ndate: 2024-01-01\n---\n\n{}", "lorem ".repeat(100));
        let item = extract_item(Collection::Blog, "t", &raw, &opts()).unwrap();
        assert!(item.description.chars().count() <= MAX_DESCRIPTION_LENGTH);
    }

    #[test]
    fn test_rejects_invalid_slug() {
        let err = try_extract_document(Collection::Blog, "../etc", BLOG, &opts()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_rejects_missing_frontmatter() {
        assert!(extract_item(Collection::Blog, "plain", "# Just markdown", &opts()).is_none());
    }

    #[test]
    fn test_rejects_missing_title() {
        let raw = "---\ndate: 2024-01-01\n---\n\nBody";
        assert!(extract_item(Collection::Blog, "x", raw, &opts()).is_none());
    }

    #[test]
    fn test_rejects_empty_title() {
        let raw = "---\ntitle: \"\"\ndate: 2024-01-01\n---\n\nBody";
        assert!(extract_item(Collection::Blog, "x", raw, &opts()).is_none());
    }

    #[test]
    fn test_rejects_malformed_date() {
        let raw = "---\ntitle: T\ndate: yesterday\n---\n\nBody";
        let err = try_extract_document(Collection::Blog, "x", raw, &opts()).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[test]
    fn test_custom_words_per_minute() {
        let raw = format!("---\ntitle: T\ndate: 2024-01-01\n---\n\n{}", "word ".repeat(300));
        let options = ProcessingOptions {
            words_per_minute: 100,
        };
        let item = extract_item(Collection::Blog, "t", &raw, &options).unwrap();
        assert_eq!(item.reading_time, 3);
        assert_eq!(item.word_count, 300);
    }
}
