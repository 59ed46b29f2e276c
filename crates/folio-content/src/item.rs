//! Content item model.
//!
//! A [`ContentItem`] is everything a listing, search, or SEO consumer needs
//! to know about one document: the authored frontmatter fields plus the
//! derived reading time, word count, and heading outline. A
//! [`ContentDocument`] pairs an item with its markdown body for detail pages.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use folio_core::{Collection, Error, Result};
use serde::{Deserialize, Serialize};

use crate::markdown::Heading;

/// Collection-specific fields of a content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ItemDetails {
    /// Blog post fields.
    Blog {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
        /// Free-form badge such as `tutorial` or `guide`.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        badge: Option<String>,
    },
    /// Project fields.
    Project {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        github: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        demo: Option<String>,
    },
}

impl ItemDetails {
    /// Empty details for a collection.
    pub fn empty(collection: Collection) -> Self {
        match collection {
            Collection::Blog => Self::Blog {
                category: None,
                badge: None,
            },
            Collection::Project => Self::Project {
                github: None,
                demo: None,
            },
        }
    }
}

/// One published or unpublished content item with its derived fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Filename-derived identifier, unique within its collection.
    pub slug: String,
    pub collection: Collection,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    /// Labels: `tags` for blog posts, `technologies` for projects.
    pub tags: Vec<String>,
    pub published: bool,
    pub featured: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Estimated minutes to read the body, at least 1.
    pub reading_time: u32,
    pub word_count: usize,
    pub headings: Vec<Heading>,
    pub details: ItemDetails,
}

impl ContentItem {
    /// Site-relative path of the item's detail page.
    pub fn path(&self) -> String {
        self.collection.item_path(&self.slug)
    }

    /// Date formatted as `YYYY-MM-DD`.
    pub fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Blog category, if any.
    pub fn category(&self) -> Option<&str> {
        match &self.details {
            ItemDetails::Blog { category, .. } => category.as_deref(),
            ItemDetails::Project { .. } => None,
        }
    }
}

/// A content item together with its markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentDocument {
    pub item: ContentItem,
    /// Markdown body with the frontmatter removed, passed through unchanged.
    pub body: String,
}

/// Parse a frontmatter date.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps, and `YYYY-MM-DDTHH:MM:SS`.
/// Only the calendar date is kept.
///
/// ```rust
/// use folio_content::item::parse_content_date;
///
/// let d = parse_content_date("2024-03-01").unwrap();
/// assert_eq!(d, parse_content_date("2024-03-01T09:30:00Z").unwrap());
/// assert!(parse_content_date("March 1st").is_err());
/// ```
pub fn parse_content_date(value: &str) -> Result<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }

    Err(Error::invalid_data(format!("Unrecognized date: {value:?}")))
}
