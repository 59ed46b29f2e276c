//! Content repository.
//!
//! Enumerates a collection through a [`DocumentSource`], runs metadata
//! extraction on every document, drops invalid and unpublished items, and
//! sorts the rest newest first. Items are recomputed on every read.

use std::cmp::Ordering;
use std::path::PathBuf;
use std::sync::Arc;

use folio_core::{Collection, is_valid_slug};

use crate::item::{ContentDocument, ContentItem};
use crate::metadata::{ProcessingOptions, extract_document};
use crate::source::{DocumentSource, FsDocumentSource};

/// Default number of items returned by [`ContentRepository::list_featured`].
pub const FEATURED_ITEMS_LIMIT: usize = 3;

/// Read-only access to the published content of every collection.
#[derive(Clone)]
pub struct ContentRepository {
    source: Arc<dyn DocumentSource>,
    options: ProcessingOptions,
}

impl std::fmt::Debug for ContentRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentRepository")
            .field("source", &self.source.name())
            .field("options", &self.options)
            .finish()
    }
}

impl ContentRepository {
    /// Create a repository over any document source.
    pub fn new(source: Arc<dyn DocumentSource>) -> Self {
        Self {
            source,
            options: ProcessingOptions::default(),
        }
    }

    /// Create a repository reading markdown files under `root`.
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        Self::new(Arc::new(FsDocumentSource::new(root)))
    }

    /// Set the processing options.
    pub fn with_options(mut self, options: ProcessingOptions) -> Self {
        self.options = options;
        self
    }

    /// The processing options in effect.
    pub fn options(&self) -> &ProcessingOptions {
        &self.options
    }

    /// List the published items of a collection, newest first.
    ///
    /// Equal dates are ordered by slug. Documents that fail extraction are
    /// logged and skipped; a source failure yields an empty list.
    pub async fn list_collection(&self, collection: Collection) -> Vec<ContentItem> {
        let slugs = match self.source.list_slugs(collection).await {
            Ok(slugs) => slugs,
            Err(e) => {
                log::warn!("Failed to list {collection} documents: {e}");
                return Vec::new();
            }
        };

        let mut items = Vec::with_capacity(slugs.len());
        for slug in slugs {
            if !is_valid_slug(&slug) {
                log::warn!("Skipping {collection} document with invalid slug: {slug:?}");
                continue;
            }
            if let Some(doc) = self.load(collection, &slug).await
                && doc.item.published
            {
                items.push(doc.item);
            }
        }

        sort_by_recency(&mut items);
        log::debug!("Listed {} published {collection} items", items.len());
        items
    }

    /// Get one published item with its body.
    ///
    /// Malformed slugs, missing documents, extraction failures, and
    /// unpublished items all yield `None`.
    pub async fn get_item(&self, collection: Collection, slug: &str) -> Option<ContentDocument> {
        if !is_valid_slug(slug) {
            log::warn!("Rejected {collection} lookup with invalid slug: {slug:?}");
            return None;
        }
        self.load(collection, slug)
            .await
            .filter(|doc| doc.item.published)
    }

    /// The first `limit` featured items of a collection, newest first.
    pub async fn list_featured(&self, collection: Collection, limit: usize) -> Vec<ContentItem> {
        self.list_collection(collection)
            .await
            .into_iter()
            .filter(|item| item.featured)
            .take(limit)
            .collect()
    }

    async fn load(&self, collection: Collection, slug: &str) -> Option<ContentDocument> {
        match self.source.read(collection, slug).await {
            Ok(raw) => extract_document(collection, slug, &raw, &self.options),
            Err(e) => {
                if e.is_not_found() {
                    log::debug!("{collection}/{slug} not found");
                } else {
                    log::warn!("Failed to read {collection}/{slug}: {e}");
                }
                None
            }
        }
    }
}

/// Sort items by date descending, then slug ascending.
pub fn sort_by_recency(items: &mut [ContentItem]) {
    items.sort_by(compare_recency);
}

fn compare_recency(a: &ContentItem, b: &ContentItem) -> Ordering {
    b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug))
}
