//! Folio Core — shared types, errors, and utilities.
//!
//! This crate provides the foundational types used across all Folio crates.
//! It has no internal Folio dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`collection`]: The content collections (blog posts, projects)
//! - [`error`]: Error types and Result alias
//! - [`util`]: Slug, heading-id, and file discovery utilities

pub mod collection;
pub mod error;
pub mod util;

// Re-export key types at crate root for convenience
pub use collection::Collection;
pub use error::{Error, Result};

// Convenience re-exports from util
pub use util::ids::{heading_id, is_valid_slug, slug_from_path, MAX_SLUG_LENGTH};
