//! HTTP API for Folio.
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /` | Featured posts and projects, `WebSite` JSON-LD |
//! | `GET /blog`, `GET /projects` | Published items, newest first |
//! | `GET /blog/{slug}`, `GET /projects/{slug}` | Item, body, related items, meta tags, JSON-LD |
//! | `GET /search?q=&limit=` | Ranked search results |
//! | `GET /sitemap.xml` | Sitemap XML |
//! | `GET /health` | `{"status":"ok"}` |
//!
//! Requests for well-known static assets under `/blog/` or `/projects/`
//! are redirected to the site root with `301`. Every response carries
//! security headers unless [`ServerConfig::security_headers`] is off.

pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use server::{ServerConfig, router, router_with, serve};
pub use state::AppState;
