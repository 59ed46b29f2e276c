//! Common fixtures for folio-content integration tests.

use std::path::Path;

use folio_content::ContentRepository;
use folio_core::Collection;
use tempfile::TempDir;

/// A content root on disk with `blogs/` and `projects/` directories.
pub struct ContentFixture {
    pub dir: TempDir,
}

impl ContentFixture {
    /// Creates an empty content root.
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        for collection in Collection::ALL {
            std::fs::create_dir_all(dir.path().join(collection.dir_name())).unwrap();
        }
        Self { dir }
    }

    /// Writes one document into a collection.
    pub fn write(&self, collection: Collection, slug: &str, raw: &str) -> &Self {
        let path = self
            .dir
            .path()
            .join(collection.dir_name())
            .join(format!("{slug}.md"));
        std::fs::write(path, raw).unwrap();
        self
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// A repository reading from this fixture.
    pub fn repository(&self) -> ContentRepository {
        ContentRepository::from_root(self.root())
    }
}

/// A document with the given frontmatter lines and body.
pub fn document(frontmatter: &str, body: &str) -> String {
    format!("---\n{frontmatter}\n---\n\n{body}")
}
