//! HTTP contract tests against an in-memory content store.

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use folio::{ContentError, ContentStore, Education, Experience, MemoryContentStore, Profile, Project};
use folio_web::{build_router, with_static_files, AppState};
use http_body_util::BodyExt;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use tower::ServiceExt;

const SEED: &str = include_str!("../../../content/portfolio.yaml");

fn app() -> axum::Router {
    let store = MemoryContentStore::from_yaml(SEED).unwrap();
    build_router(AppState::new(Arc::new(store)))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes)
        .unwrap_or_else(|_| json!({ "raw": String::from_utf8_lossy(&bytes).to_string() }));
    (status, body)
}

/// Store whose every read fails.
struct BrokenStore;

fn broken() -> ContentError {
    ContentError::Io {
        path: "/var/lib/folio/portfolio.yaml".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied"),
    }
}

#[async_trait]
impl ContentStore for BrokenStore {
    async fn profile(&self) -> Result<Profile, ContentError> {
        Err(broken())
    }

    async fn experience(&self) -> Result<Vec<Experience>, ContentError> {
        Err(broken())
    }

    async fn education(&self) -> Result<Vec<Education>, ContentError> {
        Err(broken())
    }

    async fn projects(&self) -> Result<Vec<Project>, ContentError> {
        Err(broken())
    }

    async fn health(&self) -> Result<(), ContentError> {
        Err(broken())
    }
}

#[tokio::test]
async fn health_ok() {
    let (status, body) = get(app(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok" }));
}

#[tokio::test]
async fn about_returns_profile() {
    let (status, body) = get(app(), "/api/about").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Ada Example");
    assert_eq!(body["links"].as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn lists_are_ordered() {
    let (status, body) = get(app(), "/api/experience").await;
    assert_eq!(status, StatusCode::OK);
    let companies: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["company"].as_str().unwrap())
        .collect();
    assert_eq!(companies, ["Lattice Systems", "Harbor Labs", "Northwind"]);

    let (_, body) = get(app(), "/api/education").await;
    assert_eq!(body[0]["degree"], "MSc");

    let (_, body) = get(app(), "/api/projects").await;
    let names: Vec<&str> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["folio", "tidewatch", "notes"]);
}

#[tokio::test]
async fn store_failure_is_500_with_details() {
    let app = build_router(AppState::new(Arc::new(BrokenStore)));
    let (status, body) = get(app, "/api/projects").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "failed to load projects");
    assert!(body["details"]
        .as_str()
        .unwrap()
        .contains("/var/lib/folio/portfolio.yaml"));
}

#[tokio::test]
async fn unhealthy_store() {
    let app = build_router(AppState::new(Arc::new(BrokenStore)));
    let (status, body) = get(app, "/api/health").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "content store unavailable");
}

#[tokio::test]
async fn missing_profile_is_404() {
    let store = MemoryContentStore::from_yaml("projects: []").unwrap();
    let app = build_router(AppState::new(Arc::new(store)));
    let (status, body) = get(app, "/api/about").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "failed to load about", "details": "no about content" }));
}

#[tokio::test]
async fn unknown_api_path_is_json_404() {
    let (status, body) = get(app(), "/api/contact").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["details"], "/api/contact");
}

#[tokio::test]
async fn section_paths_serve_index() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<main data-folio-sections></main>").unwrap();
    std::fs::write(dir.path().join("app.js"), "console.log('folio')").unwrap();

    let app = with_static_files(app(), dir.path());

    for path in ["/", "/about", "/projects?instant=true"] {
        let (status, body) = get(app.clone(), path).await;
        assert_eq!(status, StatusCode::OK, "{path}");
        assert_eq!(body["raw"], "<main data-folio-sections></main>", "{path}");
    }

    let (status, body) = get(app.clone(), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["raw"], "console.log('folio')");

    let (status, _) = get(app, "/api/experience").await;
    assert_eq!(status, StatusCode::OK);
}
