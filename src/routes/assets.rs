// ABOUTME: Static asset routes serving the landing page and stylesheet from the static root
// ABOUTME: A missing stylesheet answers 404 with a CSS comment body so browsers never choke on HTML
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::server::AppState;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tracing::warn;

const INDEX_FILE: &str = "index.html";
const STYLESHEET_FILE: &str = "styles.css";
const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const CSS_CONTENT_TYPE: &str = "text/css; charset=utf-8";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Body served when the stylesheet is absent
pub const MISSING_STYLESHEET_BODY: &str = "/* styles.css not found */";

/// Static asset routes
pub struct AssetRoutes;

impl AssetRoutes {
    /// Create `/`, `/index.html`, and `/styles.css`
    pub fn routes(state: Arc<AppState>) -> Router {
        Router::new()
            .route("/", get(Self::handle_index))
            .route("/index.html", get(Self::handle_index))
            .route("/styles.css", get(Self::handle_stylesheet))
            .with_state(state)
    }

    async fn handle_index(State(state): State<Arc<AppState>>) -> Response {
        match read_asset(&state.config.static_root, INDEX_FILE).await {
            Some(body) => ([(header::CONTENT_TYPE, HTML_CONTENT_TYPE)], body).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, TEXT_CONTENT_TYPE)],
                "index.html not found",
            )
                .into_response(),
        }
    }

    async fn handle_stylesheet(State(state): State<Arc<AppState>>) -> Response {
        match read_asset(&state.config.static_root, STYLESHEET_FILE).await {
            Some(body) => (
                [
                    (header::CONTENT_TYPE, CSS_CONTENT_TYPE),
                    (header::CACHE_CONTROL, "no-cache"),
                ],
                body,
            )
                .into_response(),
            None => (
                StatusCode::NOT_FOUND,
                [(header::CONTENT_TYPE, CSS_CONTENT_TYPE)],
                MISSING_STYLESHEET_BODY,
            )
                .into_response(),
        }
    }
}

async fn read_asset(root: &Path, name: &str) -> Option<Vec<u8>> {
    let path = root.join(name);
    match tokio::fs::read(&path).await {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "static asset unavailable");
            None
        }
    }
}
