//! Utility modules for slug handling and file discovery.
//!
//! # Modules
//!
//! - [`files`]: Async markdown file discovery and reading
//! - [`ids`]: Slug validation and heading anchor ids

pub mod files;
pub mod ids;
