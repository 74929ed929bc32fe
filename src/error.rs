use thiserror::Error;

use crate::models::ContentKind;

#[derive(Debug, Error)]
pub enum ContentError {
    #[cfg(feature = "database")]
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("invalid content seed: {0}")]
    Seed(#[from] serde_yaml::Error),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no {0} content")]
    NotFound(ContentKind),
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound(_))
    }
}
