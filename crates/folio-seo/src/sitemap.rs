//! Sitemap entries and XML rendering.

use std::fmt::{self, Write as _};

use chrono::NaiveDate;
use folio_content::ContentItem;
use serde::{Deserialize, Serialize};

use crate::site::SiteConfig;

/// How often a page is expected to change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

impl fmt::Display for ChangeFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` of the sitemap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapEntry {
    /// Site-relative path or absolute URL.
    pub url: String,
    pub lastmod: Option<NaiveDate>,
    pub changefreq: ChangeFrequency,
    pub priority: f32,
}

impl SitemapEntry {
    fn new(url: impl Into<String>, changefreq: ChangeFrequency, priority: f32) -> Self {
        Self {
            url: url.into(),
            lastmod: None,
            changefreq,
            priority,
        }
    }

    fn for_item(item: &ContentItem, priority: f32) -> Self {
        Self {
            lastmod: Some(item.date),
            ..Self::new(item.path(), ChangeFrequency::Monthly, priority)
        }
    }
}

/// Sitemap entries: the static pages, then every post, then every project.
pub fn sitemap_entries(blogs: &[ContentItem], projects: &[ContentItem]) -> Vec<SitemapEntry> {
    let mut entries = vec![
        SitemapEntry::new("/", ChangeFrequency::Weekly, 1.0),
        SitemapEntry::new("/blog", ChangeFrequency::Weekly, 0.8),
        SitemapEntry::new("/projects", ChangeFrequency::Monthly, 0.8),
    ];
    entries.extend(blogs.iter().map(|post| SitemapEntry::for_item(post, 0.6)));
    entries.extend(projects.iter().map(|project| SitemapEntry::for_item(project, 0.7)));
    entries
}

/// Render entries as a sitemap XML document.
pub fn sitemap_xml(entries: &[SitemapEntry], site: &SiteConfig) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for entry in entries {
        // Writing to a String cannot fail
        let _ = writeln!(xml, "  <url>");
        let _ = writeln!(xml, "    <loc>{}</loc>", escape_xml(&site.absolute_url(&entry.url)));
        if let Some(lastmod) = entry.lastmod {
            let _ = writeln!(xml, "    <lastmod>{}</lastmod>", lastmod.format("%Y-%m-%d"));
        }
        let _ = writeln!(xml, "    <changefreq>{}</changefreq>", entry.changefreq);
        let _ = writeln!(xml, "    <priority>{:.1}</priority>", entry.priority);
        let _ = writeln!(xml, "  </url>");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
