//! Common types for the search module.

use folio_content::ContentItem;
use folio_core::Collection;
use serde::{Deserialize, Serialize};

/// Search configuration.
///
/// Every weight and boost the relevance engine applies. Missing keys fall
/// back to the defaults when deserialized from a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Multiplier for title matches.
    #[serde(default = "default_title_weight")]
    pub title_weight: f64,

    /// Multiplier for description matches.
    #[serde(default = "default_description_weight")]
    pub description_weight: f64,

    /// Multiplier for blog tag matches.
    #[serde(default = "default_tags_weight")]
    pub tags_weight: f64,

    /// Multiplier for project technology matches.
    #[serde(default = "default_technologies_weight")]
    pub technologies_weight: f64,

    /// Score multiplier for featured blog posts.
    #[serde(default = "default_featured_blog_boost")]
    pub featured_blog_boost: f64,

    /// Score multiplier for featured projects.
    #[serde(default = "default_featured_project_boost")]
    pub featured_project_boost: f64,

    /// Minimum normalized similarity for a fuzzy word match.
    #[serde(default = "default_fuzzy_threshold")]
    pub fuzzy_threshold: f64,

    /// Score added per fuzzy-matched query word.
    #[serde(default = "default_fuzzy_bonus")]
    pub fuzzy_bonus: f64,

    /// Age in days after which items get no recency boost.
    #[serde(default = "default_recency_window_days")]
    pub recency_window_days: u32,

    /// Maximum recency boost, for an item published today.
    #[serde(default = "default_recency_max_boost")]
    pub recency_max_boost: f64,

    /// Default result limit.
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Extra terms appended to tag-derived suggestions.
    #[serde(default = "default_suggestion_terms")]
    pub suggestion_terms: Vec<String>,
}

fn default_title_weight() -> f64 {
    10.0
}

fn default_description_weight() -> f64 {
    5.0
}

fn default_tags_weight() -> f64 {
    3.0
}

fn default_technologies_weight() -> f64 {
    4.0
}

fn default_featured_blog_boost() -> f64 {
    1.2
}

fn default_featured_project_boost() -> f64 {
    1.3
}

fn default_fuzzy_threshold() -> f64 {
    0.7
}

fn default_fuzzy_bonus() -> f64 {
    0.5
}

fn default_recency_window_days() -> u32 {
    365
}

fn default_recency_max_boost() -> f64 {
    0.1
}

fn default_limit() -> usize {
    10
}

fn default_suggestion_terms() -> Vec<String> {
    ["react", "typescript", "svelte", "tutorial", "guide", "project"]
        .map(String::from)
        .to_vec()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            title_weight: default_title_weight(),
            description_weight: default_description_weight(),
            tags_weight: default_tags_weight(),
            technologies_weight: default_technologies_weight(),
            featured_blog_boost: default_featured_blog_boost(),
            featured_project_boost: default_featured_project_boost(),
            fuzzy_threshold: default_fuzzy_threshold(),
            fuzzy_bonus: default_fuzzy_bonus(),
            recency_window_days: default_recency_window_days(),
            recency_max_boost: default_recency_max_boost(),
            default_limit: default_limit(),
            suggestion_terms: default_suggestion_terms(),
        }
    }
}

impl SearchConfig {
    /// Weight of the label field for a collection.
    pub fn label_weight(&self, collection: Collection) -> f64 {
        match collection {
            Collection::Blog => self.tags_weight,
            Collection::Project => self.technologies_weight,
        }
    }

    /// Featured multiplier for a collection.
    pub fn featured_boost(&self, collection: Collection) -> f64 {
        match collection {
            Collection::Blog => self.featured_blog_boost,
            Collection::Project => self.featured_project_boost,
        }
    }
}

/// A field that contributed to a result's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchedField {
    Title,
    Description,
    Tags,
    Technologies,
}

impl MatchedField {
    /// The label field of a collection.
    pub fn labels_of(collection: Collection) -> Self {
        match collection {
            Collection::Blog => Self::Tags,
            Collection::Project => Self::Technologies,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::Technologies => "technologies",
        }
    }
}

/// A single search result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Collection the item belongs to.
    #[serde(rename = "type")]
    pub collection: Collection,

    /// The matched item.
    pub item: ContentItem,

    /// Relevance score, always greater than zero.
    pub score: f64,

    /// Fields with a non-zero match, in title, description, labels order.
    pub matched_fields: Vec<MatchedField>,
}

// ============================================================================
// Tests
// ============================================================================
