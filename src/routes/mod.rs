//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTML page and its JSON twin are served from one Axum router. The
//! selected section always travels in the request (path segment or
//! `?section=` query), never in server state.

pub mod sections;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// All routes with compression and request tracing.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(sections::index))
        .route("/sections/{slug}", get(sections::section_page))
        .route("/api/sections", get(sections::list_sections))
        .route("/api/sections/{slug}", get(sections::section_content))
        .route("/healthz", get(healthz))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
