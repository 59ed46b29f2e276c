//! Error types for Folio operations.
//!
//! This module provides a common `Error` type and `Result<T>` alias used across
//! all Folio crates. Uses `thiserror` for derive macros.
//!
//! Most content-level failures (bad slugs, missing frontmatter, unreadable
//! files) never reach callers as errors: the repository logs them and reports
//! "not found". The variants here cover the remaining plumbing: configuration,
//! file discovery, and serialization.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur in Folio operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// I/O error, optionally tied to the path being accessed.
    #[error("I/O error{}: {source}", display_path(.path))]
    Io {
        /// Path that was being accessed, if known.
        path: Option<PathBuf>,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Content not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid data or format.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Parse failure (frontmatter, dates).
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Create an I/O error without path context.
    pub fn io(source: std::io::Error) -> Self {
        Self::Io { path: None, source }
    }

    /// Create an I/O error for a specific path.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Self::Io {
            path: Some(path.as_ref().to_path_buf()),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a not found error.
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create an invalid data error.
    pub fn invalid_data(msg: impl Into<String>) -> Self {
        Self::InvalidData(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create a serialization error.
    pub fn serialization(msg: impl Into<String>) -> Self {
        Self::Serialization(msg.into())
    }

    /// Returns `true` if this error means the requested thing does not exist.
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound(_) => true,
            Self::Io { source, .. } => source.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Self::io(source)
    }
}

fn display_path(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| format!(" at {}", p.display()))
        .unwrap_or_default()
}

/// Result type alias using Folio's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_with_path() {
        let err = Error::io_with_path(
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
            "/content/blogs/hello.md",
        );
        let msg = err.to_string();
        assert!(msg.contains("/content/blogs/hello.md"));
        assert!(msg.contains("gone"));
    }

    #[test]
    fn test_io_error_display_without_path() {
        let err = Error::io(std::io::Error::other("boom"));
        assert_eq!(err.to_string(), "I/O error: boom");
    }

    #[test]
    fn test_is_not_found() {
        assert!(Error::not_found("post").is_not_found());
        assert!(Error::io(std::io::Error::from(std::io::ErrorKind::NotFound)).is_not_found());
        assert!(!Error::config("bad").is_not_found());
        assert!(!Error::io(std::io::Error::from(std::io::ErrorKind::PermissionDenied)).is_not_found());
    }

    #[test]
    fn test_constructors() {
        assert!(matches!(Error::parse("x"), Error::Parse(_)));
        assert!(matches!(Error::invalid_data("x"), Error::InvalidData(_)));
        assert!(matches!(Error::serialization("x"), Error::Serialization(_)));
        assert_eq!(Error::config("missing url").to_string(), "Configuration error: missing url");
    }
}
