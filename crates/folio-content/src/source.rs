//! Document sources.
//!
//! The repository never touches the filesystem directly; it asks a
//! [`DocumentSource`] for the slugs of a collection and the raw text of one
//! document.
//!
//! # Sources
//!
//! - [`FsDocumentSource`]: `<root>/blogs/*.md` and `<root>/projects/*.md`
//! - [`MemoryDocumentSource`]: documents held in memory (tests, embedding)

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::util::files::{FindOptions, find_all_files, read_file};
use folio_core::{Collection, Error, Result};

/// Abstract source of raw markdown documents.
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// List the slugs (file stems) present in a collection.
    ///
    /// Slugs are returned as found; callers validate them.
    async fn list_slugs(&self, collection: Collection) -> Result<Vec<String>>;

    /// Read the raw text (frontmatter and body) of one document.
    async fn read(&self, collection: Collection, slug: &str) -> Result<String>;

    /// Source name for diagnostics.
    fn name(&self) -> &str;
}

/// Documents stored as markdown files under a content root.
#[derive(Debug, Clone)]
pub struct FsDocumentSource {
    root: PathBuf,
}

impl FsDocumentSource {
    /// Create a source reading from `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The content root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Directory holding a collection's documents.
    pub fn collection_dir(&self, collection: Collection) -> PathBuf {
        self.root.join(collection.dir_name())
    }

    /// Path of one document.
    pub fn document_path(&self, collection: Collection, slug: &str) -> PathBuf {
        self.collection_dir(collection).join(format!("{slug}.md"))
    }
}

#[async_trait]
impl DocumentSource for FsDocumentSource {
    async fn list_slugs(&self, collection: Collection) -> Result<Vec<String>> {
        let dir = self.collection_dir(collection);
        let files = find_all_files(&dir, FindOptions::markdown()).await?;
        log::debug!("Found {} documents in {}", files.len(), dir.display());
        Ok(files.into_iter().map(|f| f.stem).collect())
    }

    async fn read(&self, collection: Collection, slug: &str) -> Result<String> {
        read_file(&self.document_path(collection, slug)).await
    }

    fn name(&self) -> &str {
        "fs"
    }
}

/// Documents held in memory, keyed by collection and slug.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocumentSource {
    documents: BTreeMap<(Collection, String), String>,
}

impl MemoryDocumentSource {
    /// Create an empty source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document, builder style.
    pub fn with_document(
        mut self,
        collection: Collection,
        slug: impl Into<String>,
        raw: impl Into<String>,
    ) -> Self {
        self.insert(collection, slug, raw);
        self
    }

    /// Add or replace a document.
    pub fn insert(&mut self, collection: Collection, slug: impl Into<String>, raw: impl Into<String>) {
        self.documents.insert((collection, slug.into()), raw.into());
    }

    /// Number of documents across all collections.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the source holds no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

#[async_trait]
impl DocumentSource for MemoryDocumentSource {
    async fn list_slugs(&self, collection: Collection) -> Result<Vec<String>> {
        Ok(self
            .documents
            .keys()
            .filter(|(c, _)| *c == collection)
            .map(|(_, slug)| slug.clone())
            .collect())
    }

    async fn read(&self, collection: Collection, slug: &str) -> Result<String> {
        self.documents
            .get(&(collection, slug.to_string()))
            .cloned()
            .ok_or_else(|| Error::not_found(format!("{collection}/{slug}")))
    }

    fn name(&self) -> &str {
        "memory"
    }
}
