//! Site-wide configuration shared by every SEO builder.

use serde::{Deserialize, Serialize};

/// The site's author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorConfig {
    pub name: String,
    pub email: String,
    /// Author home page.
    pub url: String,
    pub job_title: Option<String>,
    /// Twitter handle, with or without the leading `@`.
    pub twitter: Option<String>,
    pub github: Option<String>,
    pub linkedin: Option<String>,
}

impl Default for AuthorConfig {
    fn default() -> Self {
        Self {
            name: "Site Author".to_string(),
            email: String::new(),
            url: String::new(),
            job_title: None,
            twitter: None,
            github: None,
            linkedin: None,
        }
    }
}

/// Twitter card attribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TwitterConfig {
    /// Creator handle (`twitter:creator`).
    pub handle: String,
    /// Site handle (`twitter:site`).
    pub site: String,
}

/// Site configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site name, appended to page titles.
    pub name: String,
    /// Absolute base URL without a trailing slash.
    pub url: String,
    pub description: String,
    pub author: AuthorConfig,
    /// Image used when a page has none; relative paths resolve against `url`.
    pub default_image: String,
    pub locale: String,
    pub theme_color: String,
    pub twitter: Option<TwitterConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: "Folio".to_string(),
            url: "http://localhost:3000".to_string(),
            description: "A portfolio of writing and projects".to_string(),
            author: AuthorConfig::default(),
            default_image: "/og-image.png".to_string(),
            locale: "en_US".to_string(),
            theme_color: "#6366f1".to_string(),
            twitter: None,
        }
    }
}

impl SiteConfig {
    /// The base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Resolve a site-relative path or URL against the base URL.
    ///
    /// Values starting with `http` are returned unchanged.
    ///
    /// ```rust
    /// use folio_seo::SiteConfig;
    ///
    /// let site = SiteConfig { url: "https://example.com/".into(), ..Default::default() };
    /// assert_eq!(site.absolute_url("/blog"), "https://example.com/blog");
    /// assert_eq!(site.absolute_url("img.png"), "https://example.com/img.png");
    /// assert_eq!(site.absolute_url("https://cdn.test/x"), "https://cdn.test/x");
    /// ```
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url())
        } else {
            format!("{}/{path}", self.base_url())
        }
    }

    /// Author URL, falling back to the site URL.
    pub fn author_url(&self) -> String {
        if self.author.url.is_empty() {
            self.base_url().to_string()
        } else {
            self.author.url.clone()
        }
    }
}
