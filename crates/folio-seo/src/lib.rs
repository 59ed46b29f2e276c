//! SEO assembly for Folio: meta tags, JSON-LD, and sitemaps.
//!
//! All builders are pure functions of their inputs plus an explicit
//! [`SiteConfig`].
//!
//! # Modules
//!
//! - [`site`]: Site and author configuration, URL resolution
//! - [`meta`]: `SeoData`, page types, meta tags, page titles
//! - [`jsonld`]: schema.org documents for pages, items, listings, breadcrumbs
//! - [`sitemap`]: Sitemap entries and XML

pub mod jsonld;
pub mod meta;
pub mod site;
pub mod sitemap;

pub use jsonld::{
    Breadcrumb, blog_listing_structured_data, blog_post_structured_data,
    breadcrumb_structured_data, item_breadcrumbs, item_structured_data,
    project_listing_structured_data, project_structured_data, structured_data,
};
pub use meta::{MetaTags, PageType, SeoData, create_page_title, generate_meta_tags};
pub use site::{AuthorConfig, SiteConfig, TwitterConfig};
pub use sitemap::{ChangeFrequency, SitemapEntry, sitemap_entries, sitemap_xml};
