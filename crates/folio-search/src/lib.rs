//! Relevance search, related content, and suggestions for Folio.
//!
//! Everything here operates on already-loaded [`folio_content::ContentItem`]
//! slices; no I/O is performed.
//!
//! # Modules
//!
//! - [`types`]: `SearchConfig`, `SearchResult`, `MatchedField`
//! - [`engine`]: Weighted phrase/word/fuzzy scoring with featured and recency boosts
//! - [`fuzzy`]: Normalized Levenshtein word matching
//! - [`related`]: Label-overlap recommendations
//! - [`suggest`]: Suggested terms and `<mark>` highlighting
//!
//! # Example
//!
//! ```rust
//! use folio_search::{SearchConfig, SearchEngine};
//!
//! let engine = SearchEngine::new(SearchConfig::default());
//! assert!(engine.search("", &[], &[], 10).is_empty());
//! ```

pub mod engine;
pub mod fuzzy;
pub mod related;
pub mod suggest;
pub mod types;

pub use engine::{Query, SearchEngine};
pub use related::{RELATED_ITEMS_LIMIT, related, related_with_limit};
pub use suggest::{DEFAULT_SUGGESTIONS, highlight_search_terms, search_suggestions};
pub use types::{MatchedField, SearchConfig, SearchResult};
