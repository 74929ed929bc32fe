//! Router construction.

use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::routes::api;
use crate::state::AppState;

/// Content API under `/api`. Unknown `/api/*` paths get a JSON 404.
pub fn build_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(api::health))
        .route("/about", get(api::about))
        .route("/experience", get(api::experience))
        .route("/education", get(api::education))
        .route("/projects", get(api::projects))
        .fallback(api::not_found);

    Router::new().nest("/api", api).with_state(state)
}

/// Serve the built site from `static_dir`.
///
/// Any path without a matching file gets `index.html`, so section deep links
/// and reloads land on the single page.
pub fn with_static_files(router: Router, static_dir: impl AsRef<Path>) -> Router {
    let static_dir = static_dir.as_ref();
    let index = ServeFile::new(static_dir.join("index.html"));
    router.fallback_service(ServeDir::new(static_dir).fallback(index))
}

/// Request tracing and permissive CORS.
pub fn with_middleware(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router.layer(TraceLayer::new_for_http()).layer(cors)
}
