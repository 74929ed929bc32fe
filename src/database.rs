//! Postgres-backed content store.
//!
//! Schema lives in `migrations/`. Each list is a single ordered `SELECT`.

use async_trait::async_trait;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;
use tracing::{info, warn};

use crate::error::ContentError;
use crate::models::{ContentKind, Education, Experience, Profile, Project};
use crate::store::{ContentStore, Result};

/// Connection pool settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            max_connections: std::env::var("DATABASE_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(5),
            connection_timeout: Duration::from_secs(10),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PgContentStore {
    pool: PgPool,
}

impl PgContentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        info!(
            "Connecting to database: {}",
            mask_database_url(&config.database_url)
        );

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.connection_timeout)
            .connect(&config.database_url)
            .await
            .map_err(|e| {
                warn!("Failed to connect to database: {}", e);
                e
            })?;

        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ContentStore for PgContentStore {
    async fn profile(&self) -> Result<Profile> {
        sqlx::query_as::<_, Profile>(
            r#"SELECT id, name, headline, summary, location, email, links
               FROM profile ORDER BY id LIMIT 1"#,
        )
        .fetch_optional(&self.pool)
        .await?
        .ok_or(ContentError::NotFound(ContentKind::About))
    }

    async fn experience(&self) -> Result<Vec<Experience>> {
        Ok(sqlx::query_as::<_, Experience>(
            r#"SELECT id, company, role, location, started_on, ended_on, summary, highlights, sort_order
               FROM experience ORDER BY sort_order, started_on DESC"#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn education(&self) -> Result<Vec<Education>> {
        Ok(sqlx::query_as::<_, Education>(
            r#"SELECT id, institution, degree, field_of_study, started_on, ended_on, sort_order
               FROM education ORDER BY sort_order, started_on DESC"#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        Ok(sqlx::query_as::<_, Project>(
            r#"SELECT id, name, summary, url, repository, technologies, started_on, sort_order
               FROM projects ORDER BY sort_order, started_on DESC NULLS LAST"#,
        )
        .fetch_all(&self.pool)
        .await?)
    }

    async fn health(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Hide the password when logging a connection string.
pub fn mask_database_url(url: &str) -> String {
    match url::Url::parse(url) {
        Ok(mut parsed) => {
            if parsed.password().is_some() {
                let _ = parsed.set_password(Some("***"));
            }
            parsed.to_string()
        }
        Err(_) => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_masked() {
        assert_eq!(
            mask_database_url("postgres://folio:hunter2@db:5432/folio"),
            "postgres://folio:***@db:5432/folio"
        );
        assert_eq!(
            mask_database_url("postgres://db/folio"),
            "postgres://db/folio"
        );
        assert_eq!(mask_database_url("not a url"), "***");
    }
}
