//! Async file utilities for content collections.
//!
//! A collection is a flat directory with one markdown file per item, so
//! discovery only lists the immediate entries of a directory.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result};

/// Options for discovering files in a directory.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g., "md"
    pub extension: Option<&'static str>,
    /// Skip files whose name starts with `.`
    pub skip_hidden: bool,
}

impl FindOptions {
    /// Create options for finding markdown files.
    pub fn markdown() -> Self {
        Self {
            extension: Some("md"),
            skip_hidden: true,
        }
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File stem (filename without extension).
    pub stem: String,
}

/// Find all files matching criteria directly inside a directory.
///
/// Results are sorted by path so repeated scans see the same order.
///
/// # Example
///
/// ```no_run
/// # use folio_core::util::files::{find_all_files, FindOptions};
/// # use std::path::Path;
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let files = find_all_files(Path::new("content/blogs"), FindOptions::markdown()).await?;
/// for file in files {
///     println!("{}", file.stem);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn find_all_files(base_path: &Path, options: FindOptions) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(base_path)
        .await
        .map_err(|e| Error::io_with_path(e, base_path))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, base_path))?
    {
        let path = entry.path();

        // Skip directories
        let file_type = entry
            .file_type()
            .await
            .map_err(|e| Error::io_with_path(e, &path))?;
        if file_type.is_dir() {
            continue;
        }

        let Some(file_name) = path.file_name().and_then(|n| n.to_str()) else {
            log::debug!("Skipping non-UTF-8 file name: {}", path.display());
            continue;
        };

        if options.skip_hidden && file_name.starts_with('.') {
            continue;
        }

        // Check extension if specified
        if let Some(ext) = options.extension
            && path.extension().and_then(|e| e.to_str()) != Some(ext)
        {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };

        files.push(FileInfo {
            stem: stem.to_string(),
            path,
        });
    }

    files.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(files)
}

/// Read a file's contents as a string.
pub async fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))
}
