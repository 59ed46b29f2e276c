//! Page metadata and meta tag generation.

use folio_content::ContentItem;
use folio_core::Collection;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::site::SiteConfig;

/// Kind of page, selecting the Open Graph type and JSON-LD shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    #[default]
    Website,
    Article,
    Profile,
}

impl PageType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
            Self::Profile => "profile",
        }
    }
}

/// Everything needed to describe one page to crawlers.
///
/// Optional fields fall back to site defaults when tags are generated.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct SeoData {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub image: Option<String>,
    pub image_alt: Option<String>,
    /// Site-relative path or absolute URL of the page.
    pub url: Option<String>,
    pub page_type: PageType,
    pub published_time: Option<String>,
    pub modified_time: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
    /// Reading time in minutes.
    pub reading_time: Option<u32>,
    pub canonical: Option<String>,
}

impl SeoData {
    /// Metadata for a plain page.
    pub fn page(title: impl Into<String>, description: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            url: Some(url.into()),
            ..Default::default()
        }
    }

    /// Metadata for a content item's detail page.
    ///
    /// Blog posts are articles; projects are described as web pages.
    pub fn for_item(item: &ContentItem) -> Self {
        let page_type = match item.collection {
            Collection::Blog => PageType::Article,
            Collection::Project => PageType::Website,
        };
        Self {
            title: item.title.clone(),
            description: item.description.clone(),
            keywords: item.tags.clone(),
            image: item.image.clone(),
            image_alt: None,
            url: Some(item.path()),
            page_type,
            published_time: Some(item.date_string()),
            modified_time: None,
            author: None,
            tags: item.tags.clone(),
            reading_time: Some(item.reading_time),
            canonical: None,
        }
    }

    /// Override the page type.
    pub fn with_page_type(mut self, page_type: PageType) -> Self {
        self.page_type = page_type;
        self
    }
}

/// Meta tags in generation order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetaTags(Vec<(String, String)>);

impl MetaTags {
    fn push(&mut self, key: &str, value: impl Into<String>) {
        self.0.push((key.to_string(), value.into()));
    }

    /// Value of a tag, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for MetaTags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (k, v) in &self.0 {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

/// Image and page URLs of a page, resolved to absolute form.
pub(crate) struct ResolvedUrls {
    pub image: String,
    pub url: String,
}

pub(crate) fn resolve_urls(data: &SeoData, site: &SiteConfig) -> ResolvedUrls {
    let image = data.image.as_deref().unwrap_or(&site.default_image);
    let url = data.url.as_deref().unwrap_or(&site.url);
    ResolvedUrls {
        image: site.absolute_url(image),
        url: site.absolute_url(url),
    }
}

/// Generate the meta tags for a page.
///
/// Includes basic, Open Graph, and Twitter card tags for every page;
/// `article:*` and `reading-time` tags only for articles.
pub fn generate_meta_tags(data: &SeoData, site: &SiteConfig) -> MetaTags {
    let ResolvedUrls { image, url } = resolve_urls(data, site);
    let image_alt = data.image_alt.as_deref().unwrap_or(&data.description);
    let author = data.author.as_deref().unwrap_or(&site.author.name);
    let is_article = data.page_type == PageType::Article;

    let mut tags = MetaTags::default();
    tags.push("title", &data.title);
    tags.push("description", &data.description);
    tags.push("author", author);
    if !data.keywords.is_empty() {
        tags.push("keywords", data.keywords.join(", "));
    }
    tags.push("canonical", data.canonical.clone().unwrap_or_else(|| url.clone()));

    tags.push("og:title", &data.title);
    tags.push("og:description", &data.description);
    tags.push("og:url", &url);
    tags.push("og:image", &image);
    tags.push("og:image:alt", image_alt);
    tags.push("og:type", data.page_type.as_str());
    tags.push("og:site_name", &site.name);
    tags.push("og:locale", &site.locale);

    tags.push("twitter:card", "summary_large_image");
    tags.push("twitter:title", &data.title);
    tags.push("twitter:description", &data.description);
    tags.push("twitter:image", &image);
    tags.push("twitter:image:alt", image_alt);
    if let Some(twitter) = &site.twitter {
        tags.push("twitter:site", &twitter.site);
        tags.push("twitter:creator", &twitter.handle);
    }

    if is_article {
        tags.push("article:author", author);
        if let Some(published) = &data.published_time {
            tags.push("article:published_time", published);
        }
        if let Some(modified) = &data.modified_time {
            tags.push("article:modified_time", modified);
        }
        if !data.tags.is_empty() {
            tags.push("article:tag", data.tags.join(", "));
        }
    }

    tags.push("theme-color", &site.theme_color);
    tags.push("color-scheme", "light dark");

    if is_article && let Some(minutes) = data.reading_time {
        tags.push("reading-time", format!("{minutes} min read"));
    }

    tags
}

/// Page title with the site name appended.
///
/// The name is not appended twice, or at all when `include_site_name` is false.
///
/// ```rust
/// use folio_seo::{create_page_title, SiteConfig};
///
/// let site = SiteConfig { name: "Folio".into(), ..Default::default() };
/// assert_eq!(create_page_title("Blog", &site, true), "Blog | Folio");
/// assert_eq!(create_page_title("Folio Home", &site, true), "Folio Home");
/// assert_eq!(create_page_title("Blog", &site, false), "Blog");
/// ```
pub fn create_page_title(title: &str, site: &SiteConfig, include_site_name: bool) -> String {
    if !include_site_name || title.contains(&site.name) {
        return title.to_string();
    }
    format!("{title} | {}", site.name)
}
