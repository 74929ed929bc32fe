//! Server configuration from the environment.
//!
//! | Variable             | Meaning                                   | Default            |
//! |----------------------|-------------------------------------------|--------------------|
//! | `DATABASE_URL`       | Postgres content (feature `database`)     | -                  |
//! | `FOLIO_CONTENT_FILE` | YAML content seed                         | -                  |
//! | `SERVER_PORT`        | Listen port                               | `3000`             |
//! | `STATIC_DIR`         | Built single-page site                    | `<crate>/static`   |
//!
//! One of `DATABASE_URL` or `FOLIO_CONTENT_FILE` must be set.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no content source: set DATABASE_URL or FOLIO_CONTENT_FILE")]
    MissingContentSource,

    #[error("DATABASE_URL is set but this build has no database support; set FOLIO_CONTENT_FILE or rebuild with --features database")]
    DatabaseSupportDisabled,

    #[error("invalid SERVER_PORT '{0}'")]
    InvalidPort(String),
}

/// Where section content is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    #[cfg(feature = "database")]
    Database(String),
    File(PathBuf),
}

impl fmt::Display for ContentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "database")]
            ContentSource::Database(url) => {
                write!(f, "postgres {}", folio::database::mask_database_url(url))
            }
            ContentSource::File(path) => write!(f, "file {}", path.display()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub source: ContentSource,
    pub port: u16,
    pub static_dir: PathBuf,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match get("SERVER_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        let static_dir = get("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static")));

        Ok(Self {
            source: content_source(get("DATABASE_URL"), get("FOLIO_CONTENT_FILE"))?,
            port,
            static_dir,
        })
    }
}

#[cfg(feature = "database")]
fn content_source(
    database_url: Option<String>,
    content_file: Option<String>,
) -> Result<ContentSource, ConfigError> {
    match (database_url, content_file) {
        (Some(url), _) => Ok(ContentSource::Database(url)),
        (None, Some(path)) => Ok(ContentSource::File(PathBuf::from(path))),
        (None, None) => Err(ConfigError::MissingContentSource),
    }
}

#[cfg(not(feature = "database"))]
fn content_source(
    database_url: Option<String>,
    content_file: Option<String>,
) -> Result<ContentSource, ConfigError> {
    match (database_url, content_file) {
        (_, Some(path)) => Ok(ContentSource::File(PathBuf::from(path))),
        (Some(_), None) => Err(ConfigError::DatabaseSupportDisabled),
        (None, None) => Err(ConfigError::MissingContentSource),
    }
}
