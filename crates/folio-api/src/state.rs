//! Shared application state.

use std::sync::Arc;

use folio_content::ContentRepository;
use folio_search::{SearchConfig, SearchEngine};
use folio_seo::SiteConfig;

/// State shared by every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub repository: ContentRepository,
    pub search: Arc<SearchConfig>,
    pub site: Arc<SiteConfig>,
}

impl AppState {
    pub fn new(repository: ContentRepository, search: SearchConfig, site: SiteConfig) -> Self {
        Self {
            repository,
            search: Arc::new(search),
            site: Arc::new(site),
        }
    }

    /// A search engine measuring recency against today's date.
    pub fn search_engine(&self) -> SearchEngine {
        SearchEngine::new(self.search.as_ref().clone())
    }
}
