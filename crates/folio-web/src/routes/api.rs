//! Content endpoints. Each one is a single store read.

use axum::{
    extract::{OriginalUri, State},
    Json,
};
use folio::{ContentKind, Education, Experience, Profile, Project};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /api/health
pub async fn health(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    state.store.health().await.map_err(ApiError::Unhealthy)?;
    Ok(Json(HealthResponse { status: "ok" }))
}

/// GET /api/about
pub async fn about(State(state): State<AppState>) -> Result<Json<Profile>, ApiError> {
    state
        .store
        .profile()
        .await
        .map(Json)
        .map_err(ApiError::content(ContentKind::About))
}

/// GET /api/experience
pub async fn experience(State(state): State<AppState>) -> Result<Json<Vec<Experience>>, ApiError> {
    state
        .store
        .experience()
        .await
        .map(Json)
        .map_err(ApiError::content(ContentKind::Experience))
}

/// GET /api/education
pub async fn education(State(state): State<AppState>) -> Result<Json<Vec<Education>>, ApiError> {
    state
        .store
        .education()
        .await
        .map(Json)
        .map_err(ApiError::content(ContentKind::Education))
}

/// GET /api/projects
pub async fn projects(State(state): State<AppState>) -> Result<Json<Vec<Project>>, ApiError> {
    state
        .store
        .projects()
        .await
        .map(Json)
        .map_err(ApiError::content(ContentKind::Projects))
}

pub async fn not_found(OriginalUri(uri): OriginalUri) -> ApiError {
    ApiError::UnknownRoute(uri.path().to_string())
}
