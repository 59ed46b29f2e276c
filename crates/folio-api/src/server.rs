//! Router assembly and the HTTP server.

use axum::Router;
use axum::routing::get;
use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

use tower_http::trace::TraceLayer;

use crate::middleware::with_security_headers;
use crate::routes;
use crate::state::AppState;

/// Server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Add the security headers to every response. Turn off only when a
    /// reverse proxy sets them.
    pub security_headers: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            security_headers: true,
        }
    }
}

impl ServerConfig {
    /// Set the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// `host:port` for display.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Build the application router with default server settings.
pub fn router(state: AppState) -> Router {
    router_with(state, &ServerConfig::default())
}

/// Build the application router.
pub fn router_with(state: AppState, config: &ServerConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(routes::home))
        .route("/health", get(routes::health))
        .route("/blog", get(routes::list_blogs))
        .route("/blog/{slug}", get(routes::blog_detail))
        .route("/projects", get(routes::list_projects))
        .route("/projects/{slug}", get(routes::project_detail))
        .route("/search", get(routes::search))
        .route("/sitemap.xml", get(routes::sitemap))
        .fallback(routes::not_found);

    if config.security_headers {
        app = with_security_headers(app);
    } else {
        tracing::warn!("Security headers disabled");
    }

    app.layer(TraceLayer::new_for_http()).with_state(state)
}

/// Serve the API until the process is stopped.
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<()> {
    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port))
        .await
        .map_err(|e| Error::config(format!("Cannot listen on {}: {e}", config.address())))?;
    let addr = listener.local_addr().map_err(Error::io)?;

    tracing::info!("Folio API listening on http://{addr}");
    axum::serve(listener, router_with(state, config)).await.map_err(Error::io)
}
