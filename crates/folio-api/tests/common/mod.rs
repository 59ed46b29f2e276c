//! Common fixtures for folio-api integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::{Body, to_bytes};
use folio_api::{AppState, ServerConfig, router, router_with};
use folio_content::{ContentRepository, MemoryDocumentSource};
use folio_core::Collection;
use folio_search::SearchConfig;
use folio_seo::SiteConfig;
use http::{Request, Response};
use tower::ServiceExt;

pub const SITE_URL: &str = "https://folio.test";

/// Router over a small in-memory site.
pub fn app() -> Router {
    router(state())
}

/// Router over the same site with custom server settings.
pub fn app_with(config: &ServerConfig) -> Router {
    router_with(state(), config)
}

fn state() -> AppState {
    let source = MemoryDocumentSource::new()
        .with_document(
            Collection::Blog,
            "async-rust",
            "---\ntitle: Async Rust\ndate: 2024-03-01\ndescription: Futures and executors\ntags: [rust, async]\npublished: true\nfeatured: true\n---\n\n# Async Rust\n\nSome words.\n",
        )
        .with_document(
            Collection::Blog,
            "rust-web",
            "---\ntitle: Rust on the Web\ndate: 2024-01-15\ntags: [rust, web]\npublished: true\n---\n\nServing pages.\n",
        )
        .with_document(
            Collection::Blog,
            "draft",
            "---\ntitle: Draft\ndate: 2024-05-01\npublished: false\n---\n\nNot yet.\n",
        )
        .with_document(
            Collection::Project,
            "folio",
            "---\ntitle: Folio\ndate: 2023-06-01\ntechnologies: [Rust, axum]\ngithub: https://github.com/example/folio\npublished: true\nfeatured: true\n---\n\nA portfolio engine.\n",
        );

    let site = SiteConfig {
        name: "Folio".into(),
        url: SITE_URL.into(),
        ..Default::default()
    };
    AppState::new(
        ContentRepository::new(Arc::new(source)),
        SearchConfig::default(),
        site,
    )
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Read a response body as a string.
pub async fn body_string(resp: Response<Body>) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Read a response body as JSON.
pub async fn body_json(resp: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(resp).await).unwrap()
}
