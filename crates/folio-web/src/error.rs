//! API errors and their JSON shape.
//!
//! Every failure renders as `{ "error": <summary>, "details": <cause> }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use folio::{ContentError, ContentKind};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to load {kind}")]
    Content {
        kind: ContentKind,
        #[source]
        source: ContentError,
    },

    #[error("content store unavailable")]
    Unhealthy(#[source] ContentError),

    #[error("no such endpoint")]
    UnknownRoute(String),
}

impl ApiError {
    /// Adapter for `map_err` on store calls.
    pub fn content(kind: ContentKind) -> impl FnOnce(ContentError) -> ApiError {
        move |source| ApiError::Content { kind, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Content { source, .. } if source.is_not_found() => StatusCode::NOT_FOUND,
            ApiError::UnknownRoute(_) => StatusCode::NOT_FOUND,
            ApiError::Content { .. } | ApiError::Unhealthy(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn details(&self) -> String {
        match self {
            ApiError::Content { source, .. } | ApiError::Unhealthy(source) => source.to_string(),
            ApiError::UnknownRoute(path) => path.clone(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let details = self.details();
        if status.is_server_error() {
            tracing::error!(error = %self, %details, "request failed");
        } else {
            tracing::debug!(error = %self, %details, "request rejected");
        }

        let body = json!({
            "error": self.to_string(),
            "details": details,
        });
        (status, Json(body)).into_response()
    }
}
