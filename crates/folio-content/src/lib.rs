//! Markdown content processing and the content repository for Folio.
//!
//! # Modules
//!
//! - [`markdown`]: Frontmatter, headings, first paragraph, reading time
//!   - [`markdown::frontmatter`]: YAML frontmatter extraction
//!   - [`markdown::headings`]: Heading outline and anchor ids
//!   - [`markdown::reading_time`]: Word count and reading-time estimation
//! - [`item`]: `ContentItem` / `ContentDocument` and date parsing
//! - [`metadata`]: Per-collection frontmatter schemas and extraction
//! - [`source`]: Where raw documents come from
//! - [`repository`]: Listing, lookup, and featured items
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use folio_content::{ContentRepository, MemoryDocumentSource};
//! use folio_core::Collection;
//!
//! # tokio_test::block_on(async {
//! let source = MemoryDocumentSource::new().with_document(
//!     Collection::Blog,
//!     "hello",
//!     "---\ntitle: Hello\ndate: 2024-01-01\npublished: true\n---\n\nHi there.",
//! );
//! let repo = ContentRepository::new(Arc::new(source));
//!
//! let posts = repo.list_collection(Collection::Blog).await;
//! assert_eq!(posts[0].title, "Hello");
//! assert_eq!(posts[0].reading_time, 1);
//! # });
//! ```

pub mod item;
pub mod markdown;
pub mod metadata;
pub mod repository;
pub mod source;

// Re-export commonly used types
pub use item::{ContentDocument, ContentItem, ItemDetails, parse_content_date};
pub use markdown::{
    Heading, ReadingTime, estimate_reading_time, extract_frontmatter, extract_headings,
    strip_frontmatter,
};
pub use metadata::{ProcessingOptions, extract_document, extract_item};
pub use repository::{ContentRepository, FEATURED_ITEMS_LIMIT, sort_by_recency};
pub use source::{DocumentSource, FsDocumentSource, MemoryDocumentSource};
