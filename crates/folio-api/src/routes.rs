//! Route handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Path, Query, State};
use axum::response::{IntoResponse, Response};
use folio_content::{ContentItem, ContentRepository, FEATURED_ITEMS_LIMIT};
use folio_core::Collection;
use folio_search::{DEFAULT_SUGGESTIONS, SearchResult, related, search_suggestions};
use folio_seo::{
    Breadcrumb, MetaTags, SeoData, blog_listing_structured_data, generate_meta_tags,
    item_breadcrumbs, item_structured_data, project_listing_structured_data, sitemap_entries,
    sitemap_xml, structured_data,
};
use http::{StatusCode, header};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Static assets that crawlers sometimes request under a collection prefix.
pub const STATIC_ASSETS: [&str; 7] = [
    "manifest.json",
    "robots.txt",
    "sitemap.xml",
    "favicon.ico",
    "favicon.png",
    "og-image.png",
    "og-image.svg",
];

/// Largest accepted `limit` for `/search`.
pub const MAX_SEARCH_LIMIT: usize = 100;

const SITEMAP_CACHE_CONTROL: &str = "max-age=3600";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Body of `GET /`.
#[derive(Debug, Serialize)]
pub struct HomeResponse {
    pub featured_posts: Vec<ContentItem>,
    pub featured_projects: Vec<ContentItem>,
    pub meta: MetaTags,
    pub structured_data: Value,
}

/// Body of `GET /blog` and `GET /projects`.
#[derive(Debug, Serialize)]
pub struct ListingResponse {
    pub items: Vec<ContentItem>,
    pub total: usize,
    pub structured_data: Value,
}

/// Body of `GET /blog/{slug}` and `GET /projects/{slug}`.
#[derive(Debug, Serialize)]
pub struct DetailResponse {
    pub item: ContentItem,
    pub body: String,
    pub related: Vec<ContentItem>,
    pub meta: MetaTags,
    pub structured_data: Value,
    pub breadcrumbs: Vec<Breadcrumb>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub total: usize,
    /// Label terms to offer when nothing matched.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// Featured posts and projects, as shown on the home page.
pub async fn home(State(state): State<AppState>) -> Json<HomeResponse> {
    let (featured_posts, featured_projects) = tokio::join!(
        state
            .repository
            .list_featured(Collection::Blog, FEATURED_ITEMS_LIMIT),
        state
            .repository
            .list_featured(Collection::Project, FEATURED_ITEMS_LIMIT),
    );
    let page = SeoData::page(state.site.name.clone(), state.site.description.clone(), "/");

    Json(HomeResponse {
        featured_posts,
        featured_projects,
        meta: generate_meta_tags(&page, &state.site),
        structured_data: structured_data(&page, &state.site),
    })
}

pub async fn list_blogs(State(state): State<AppState>) -> Json<ListingResponse> {
    let items = state.repository.list_collection(Collection::Blog).await;
    let structured_data = blog_listing_structured_data(&items, &state.site);
    Json(ListingResponse {
        total: items.len(),
        items,
        structured_data,
    })
}

pub async fn list_projects(State(state): State<AppState>) -> Json<ListingResponse> {
    let items = state.repository.list_collection(Collection::Project).await;
    let structured_data = project_listing_structured_data(&items, &state.site);
    Json(ListingResponse {
        total: items.len(),
        items,
        structured_data,
    })
}

pub async fn blog_detail(State(state): State<AppState>, Path(slug): Path<String>) -> ApiResult<Response> {
    detail(&state, Collection::Blog, &slug).await
}

pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Response> {
    detail(&state, Collection::Project, &slug).await
}

async fn detail(state: &AppState, collection: Collection, slug: &str) -> ApiResult<Response> {
    if STATIC_ASSETS.contains(&slug) {
        tracing::debug!("Redirecting {collection} path {slug} to static asset");
        return Ok(static_redirect(slug));
    }

    let doc = state
        .repository
        .get_item(collection, slug)
        .await
        .ok_or_else(|| ApiError::not_found(format!("{collection}/{slug}")))?;

    let related = related_items(&state.repository, &doc.item).await;
    let meta = generate_meta_tags(&SeoData::for_item(&doc.item), &state.site);
    let structured_data = item_structured_data(&doc.item, &state.site);
    let breadcrumbs = item_breadcrumbs(&doc.item);

    Ok(Json(DetailResponse {
        item: doc.item,
        body: doc.body,
        related,
        meta,
        structured_data,
        breadcrumbs,
    })
    .into_response())
}

async fn related_items(repository: &ContentRepository, item: &ContentItem) -> Vec<ContentItem> {
    let corpus = repository.list_collection(item.collection).await;
    related(&item.slug, &item.tags, &corpus)
}

fn static_redirect(asset: &str) -> Response {
    (
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, format!("/{asset}"))],
    )
        .into_response()
}

pub async fn search(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> ApiResult<Json<SearchResponse>> {
    let Query(params) = params?;
    let engine = state.search_engine();
    let limit = params.limit.unwrap_or(engine.config().default_limit);
    if limit == 0 || limit > MAX_SEARCH_LIMIT {
        return Err(ApiError::bad_request(format!(
            "limit must be between 1 and {MAX_SEARCH_LIMIT}"
        )));
    }

    let (blogs, projects) = tokio::join!(
        state.repository.list_collection(Collection::Blog),
        state.repository.list_collection(Collection::Project),
    );
    let results = engine.search(&params.q, &blogs, &projects, limit);
    tracing::debug!("Search {:?} returned {} results", params.q, results.len());

    let suggestions = if results.is_empty() {
        search_suggestions(
            &blogs,
            &projects,
            &engine.config().suggestion_terms,
            DEFAULT_SUGGESTIONS,
        )
    } else {
        Vec::new()
    };

    Ok(Json(SearchResponse {
        query: params.q,
        total: results.len(),
        results,
        suggestions,
    }))
}

pub async fn sitemap(State(state): State<AppState>) -> Response {
    let (blogs, projects) = tokio::join!(
        state.repository.list_collection(Collection::Blog),
        state.repository.list_collection(Collection::Project),
    );
    let xml = sitemap_xml(&sitemap_entries(&blogs, &projects), &state.site);

    (
        [
            (header::CONTENT_TYPE, "application/xml"),
            (header::CACHE_CONTROL, SITEMAP_CACHE_CONTROL),
        ],
        xml,
    )
        .into_response()
}

pub async fn not_found() -> ApiError {
    ApiError::not_found("no such route")
}
