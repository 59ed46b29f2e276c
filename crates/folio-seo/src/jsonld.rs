//! JSON-LD structured data (schema.org).
//!
//! Every builder returns a [`serde_json::Value`]; callers embed it in a
//! `<script type="application/ld+json">` tag or return it from an API.

use folio_content::{ContentItem, ItemDetails};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

use crate::meta::{PageType, SeoData, resolve_urls};
use crate::site::SiteConfig;

const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Blog listings describe at most this many posts.
pub const BLOG_LISTING_LIMIT: usize = 10;

/// One step of a breadcrumb trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    pub name: String,
    /// Site-relative path or absolute URL.
    pub url: String,
}

impl Breadcrumb {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Structured data for a page, shaped by its [`PageType`].
///
/// - `Article`: `BlogPosting` with author, publisher, and reading time
/// - `Profile`: `Person` describing the site author
/// - `Website`: `WebSite` with a search action
pub fn structured_data(data: &SeoData, site: &SiteConfig) -> Value {
    match data.page_type {
        PageType::Article => article_data(data, site),
        PageType::Profile => profile_data(data, site),
        PageType::Website => website_data(site),
    }
}

fn person(site: &SiteConfig) -> Value {
    json!({
        "@type": "Person",
        "name": site.author.name,
        "url": site.author_url(),
    })
}

fn article_data(data: &SeoData, site: &SiteConfig) -> Value {
    let urls = resolve_urls(data, site);
    let author = data.author.as_deref().unwrap_or(&site.author.name);

    let mut doc = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BlogPosting",
        "headline": data.title,
        "description": data.description,
        "url": urls.url,
        "image": {
            "@type": "ImageObject",
            "url": urls.image,
            "width": 1200,
            "height": 630,
        },
        "author": {
            "@type": "Person",
            "name": author,
            "url": site.author_url(),
        },
        "publisher": {
            "@type": "Organization",
            "name": site.name,
            "url": site.base_url(),
            "logo": {
                "@type": "ImageObject",
                "url": site.absolute_url("/favicon.png"),
            },
        },
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": urls.url,
        },
    });

    if let Some(obj) = doc.as_object_mut() {
        insert_opt(obj, "datePublished", data.published_time.clone());
        insert_opt(obj, "dateModified", data.modified_time.clone());
        insert_opt(obj, "timeRequired", data.reading_time.map(|m| format!("PT{m}M")));
    }
    doc
}

fn profile_data(data: &SeoData, site: &SiteConfig) -> Value {
    let urls = resolve_urls(data, site);
    let author = &site.author;

    let mut same_as: Vec<String> = [&author.github, &author.linkedin]
        .into_iter()
        .flatten()
        .cloned()
        .collect();
    if let Some(handle) = &author.twitter {
        same_as.push(format!("https://twitter.com/{}", handle.trim_start_matches('@')));
    }

    let mut doc = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Person",
        "name": author.name,
        "url": site.base_url(),
        "description": data.description,
        "image": urls.image,
        "sameAs": same_as,
    });

    if let Some(obj) = doc.as_object_mut() {
        if !author.email.is_empty() {
            obj.insert("email".into(), json!(author.email));
        }
        insert_opt(obj, "jobTitle", author.job_title.clone());
    }
    doc
}

fn website_data(site: &SiteConfig) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": site.name,
        "description": site.description,
        "url": site.base_url(),
        "author": person(site),
        "potentialAction": {
            "@type": "SearchAction",
            "target": format!("{}/search?q={{search_term_string}}", site.base_url()),
            "query-input": "required name=search_term_string",
        },
    })
}

fn insert_opt(obj: &mut Map<String, Value>, key: &str, value: Option<String>) {
    if let Some(value) = value {
        obj.insert(key.to_string(), Value::String(value));
    }
}

/// `BreadcrumbList` for a trail of pages, positions starting at 1.
pub fn breadcrumb_structured_data(crumbs: &[Breadcrumb], site: &SiteConfig) -> Value {
    let elements: Vec<Value> = crumbs
        .iter()
        .enumerate()
        .map(|(i, crumb)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "name": crumb.name,
                "item": site.absolute_url(&crumb.url),
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// Breadcrumbs for a content item: home, collection listing, item.
pub fn item_breadcrumbs(item: &ContentItem) -> Vec<Breadcrumb> {
    let listing = match item.collection {
        folio_core::Collection::Blog => "Blog",
        folio_core::Collection::Project => "Projects",
    };
    vec![
        Breadcrumb::new("Home", "/"),
        Breadcrumb::new(listing, item.collection.route_prefix()),
        Breadcrumb::new(item.title.clone(), item.path()),
    ]
}

/// Structured data for a content item, by collection.
pub fn item_structured_data(item: &ContentItem, site: &SiteConfig) -> Value {
    match &item.details {
        ItemDetails::Blog { .. } => blog_post_structured_data(item, site),
        ItemDetails::Project { .. } => project_structured_data(item, site),
    }
}

/// `BlogPosting` for a blog post.
pub fn blog_post_structured_data(item: &ContentItem, site: &SiteConfig) -> Value {
    let url = site.absolute_url(&item.path());
    let image = site.absolute_url(item.image.as_deref().unwrap_or(&site.default_image));
    let date = item.date_string();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BlogPosting",
        "headline": item.title,
        "description": item.description,
        "author": person(site),
        "datePublished": date,
        "dateModified": date,
        "mainEntityOfPage": {
            "@type": "WebPage",
            "@id": url,
        },
        "publisher": {
            "@type": "Person",
            "name": site.author.name,
        },
        "image": image,
        "articleSection": item.category().unwrap_or("Development"),
        "keywords": item.tags.join(", "),
        "wordCount": item.word_count,
        "timeRequired": format!("PT{}M", item.reading_time),
        "inLanguage": language_tag(&site.locale),
        "url": url,
    })
}

/// `CreativeWork` for a project.
pub fn project_structured_data(item: &ContentItem, site: &SiteConfig) -> Value {
    let url = site.absolute_url(&item.path());
    let image = site.absolute_url(item.image.as_deref().unwrap_or(&site.default_image));
    let date = item.date_string();

    let mut doc = json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "CreativeWork",
        "@id": url,
        "name": item.title,
        "description": item.description,
        "author": person(site),
        "dateCreated": date,
        "datePublished": date,
        "image": image,
        "url": url,
        "keywords": item.tags.join(", "),
        "programmingLanguage": item.tags,
    });

    if let (Some(obj), ItemDetails::Project { github, demo }) = (doc.as_object_mut(), &item.details) {
        insert_opt(obj, "codeRepository", github.clone());
        if let Some(demo) = demo {
            obj.insert(
                "workExample".into(),
                json!({ "@type": "WebSite", "url": demo }),
            );
        }
    }
    doc
}

/// `Blog` document for the blog listing, describing the first ten posts.
pub fn blog_listing_structured_data(posts: &[ContentItem], site: &SiteConfig) -> Value {
    let url = site.absolute_url("/blog");
    let entries: Vec<Value> = posts
        .iter()
        .take(BLOG_LISTING_LIMIT)
        .map(|post| {
            json!({
                "@type": "BlogPosting",
                "@id": site.absolute_url(&post.path()),
                "headline": post.title,
                "description": post.description,
                "datePublished": post.date_string(),
                "author": { "@type": "Person", "name": site.author.name },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Blog",
        "@id": url,
        "name": format!("{}'s Blog", site.author.name),
        "description": site.description,
        "url": url,
        "author": { "@type": "Person", "name": site.author.name },
        "blogPost": entries,
    })
}

/// `ItemList` document for the project listing.
pub fn project_listing_structured_data(projects: &[ContentItem], site: &SiteConfig) -> Value {
    let url = site.absolute_url("/projects");
    let elements: Vec<Value> = projects
        .iter()
        .enumerate()
        .map(|(i, project)| {
            json!({
                "@type": "ListItem",
                "position": i + 1,
                "item": {
                    "@type": "CreativeWork",
                    "@id": site.absolute_url(&project.path()),
                    "name": project.title,
                    "description": project.description,
                    "dateCreated": project.date_string(),
                    "author": { "@type": "Person", "name": site.author.name },
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "ItemList",
        "@id": url,
        "name": format!("{}'s Projects", site.author.name),
        "description": site.description,
        "url": url,
        "numberOfItems": projects.len(),
        "itemListElement": elements,
    })
}

/// `en_US` → `en-US`.
fn language_tag(locale: &str) -> String {
    locale.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use folio_core::Collection;

    fn site() -> SiteConfig {
        let mut site = SiteConfig {
            name: "Folio".into(),
            url: "https://folio.test".into(),
            ..Default::default()
        };
        site.author.name = "Ada".into();
        site
    }

    fn item(collection: Collection, slug: &str) -> ContentItem {
        ContentItem {
            slug: slug.into(),
            collection,
            title: format!("Title {slug}"),
            description: "Desc".into(),
            date: NaiveDate::from_ymd_opt(2024, 5, 6).unwrap(),
            tags: vec!["Rust".into(), "axum".into()],
            published: true,
            featured: false,
            image: None,
            reading_time: 3,
            word_count: 512,
            headings: vec![],
            details: ItemDetails::empty(collection),
        }
    }

    // ------------------------------------------------------------------------
    // Page-type variants
    // ------------------------------------------------------------------------

    #[test]
    fn test_article_variant() {
        let data = SeoData::for_item(&item(Collection::Blog, "post"));
        let doc = structured_data(&data, &site());

        assert_eq!(doc["@context"], "https://schema.org");
        assert_eq!(doc["@type"], "BlogPosting");
        assert_eq!(doc["url"], "https://folio.test/blog/post");
        assert_eq!(doc["image"]["url"], "https://folio.test/og-image.png");
        assert_eq!(doc["publisher"]["logo"]["url"], "https://folio.test/favicon.png");
        assert_eq!(doc["datePublished"], "2024-05-06");
        assert_eq!(doc["timeRequired"], "PT3M");
        assert!(doc.get("dateModified").is_none());
    }

    #[test]
    fn test_profile_variant() {
        let mut site = site();
        site.author.github = Some("https://github.com/ada".into());
        site.author.twitter = Some("@ada".into());
        site.author.job_title = Some("Engineer".into());
        let data = SeoData::page("About", "About Ada", "/about").with_page_type(PageType::Profile);
        let doc = structured_data(&data, &site);

        assert_eq!(doc["@type"], "Person");
        assert_eq!(doc["name"], "Ada");
        assert_eq!(doc["jobTitle"], "Engineer");
        assert_eq!(
            doc["sameAs"],
            json!(["https://github.com/ada", "https://twitter.com/ada"])
        );
        assert!(doc.get("email").is_none());
    }

    #[test]
    fn test_website_variant() {
        let doc = structured_data(&SeoData::page("Home", "Welcome", "/"), &site());
        assert_eq!(doc["@type"], "WebSite");
        assert_eq!(
            doc["potentialAction"]["target"],
            "https://folio.test/search?q={search_term_string}"
        );
    }

    // ------------------------------------------------------------------------
    // Breadcrumbs
    // ------------------------------------------------------------------------

    #[test]
    fn test_breadcrumbs() {
        let crumbs = item_breadcrumbs(&item(Collection::Project, "folio"));
        let doc = breadcrumb_structured_data(&crumbs, &site());

        let elements = doc["itemListElement"].as_array().unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0]["position"], 1);
        assert_eq!(elements[0]["item"], "https://folio.test/");
        assert_eq!(elements[1]["name"], "Projects");
        assert_eq!(elements[2]["item"], "https://folio.test/projects/folio");
    }

    // ------------------------------------------------------------------------
    // Item documents
    // ------------------------------------------------------------------------

    #[test]
    fn test_blog_post_document() {
        let doc = item_structured_data(&item(Collection::Blog, "post"), &site());
        assert_eq!(doc["@type"], "BlogPosting");
        assert_eq!(doc["articleSection"], "Development");
        assert_eq!(doc["keywords"], "Rust, axum");
        assert_eq!(doc["wordCount"], 512);
        assert_eq!(doc["inLanguage"], "en-US");
        assert_eq!(doc["mainEntityOfPage"]["@id"], "https://folio.test/blog/post");
    }

    #[test]
    fn test_project_document_links() {
        let mut project = item(Collection::Project, "folio");
        project.details = ItemDetails::Project {
            github: Some("https://github.com/ada/folio".into()),
            demo: Some("https://demo.test".into()),
        };
        let doc = item_structured_data(&project, &site());

        assert_eq!(doc["@type"], "CreativeWork");
        assert_eq!(doc["codeRepository"], "https://github.com/ada/folio");
        assert_eq!(doc["workExample"]["url"], "https://demo.test");
        assert_eq!(doc["programmingLanguage"], json!(["Rust", "axum"]));
    }

    #[test]
    fn test_project_document_without_links() {
        let doc = project_structured_data(&item(Collection::Project, "folio"), &site());
        assert!(doc.get("codeRepository").is_none());
        assert!(doc.get("workExample").is_none());
    }

    // ------------------------------------------------------------------------
    // Listings
    // ------------------------------------------------------------------------

    #[test]
    fn test_blog_listing_caps_posts() {
        let posts: Vec<ContentItem> = (0..12)
            .map(|i| item(Collection::Blog, &format!("p{i}")))
            .collect();
        let doc = blog_listing_structured_data(&posts, &site());

        assert_eq!(doc["@type"], "Blog");
        assert_eq!(doc["name"], "Ada's Blog");
        assert_eq!(doc["blogPost"].as_array().unwrap().len(), BLOG_LISTING_LIMIT);
        assert_eq!(doc["blogPost"][0]["@id"], "https://folio.test/blog/p0");
    }

    #[test]
    fn test_project_listing() {
        let projects = vec![item(Collection::Project, "a"), item(Collection::Project, "b")];
        let doc = project_listing_structured_data(&projects, &site());

        assert_eq!(doc["@type"], "ItemList");
        assert_eq!(doc["numberOfItems"], 2);
        assert_eq!(doc["itemListElement"][1]["position"], 2);
        assert_eq!(doc["itemListElement"][1]["item"]["name"], "Title b");
    }
}
