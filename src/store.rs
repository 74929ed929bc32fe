//! Content store port and the in-memory implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ContentError;
use crate::models::{sort_rows, ContentKind, Education, Experience, Profile, Project};

pub type Result<T> = std::result::Result<T, ContentError>;

/// Read access to portfolio content.
///
/// Lists come back in display order. Implementations hold no per-request
/// state, so one store is shared by every handler behind an `Arc`.
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn profile(&self) -> Result<Profile>;

    async fn experience(&self) -> Result<Vec<Experience>>;

    async fn education(&self) -> Result<Vec<Education>>;

    async fn projects(&self) -> Result<Vec<Project>>;

    /// Cheap reachability check for health endpoints.
    async fn health(&self) -> Result<()>;
}

/// Whole-site content document, as stored in the YAML seed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    #[serde(default)]
    pub profile: Option<Profile>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub projects: Vec<Project>,
}

impl Portfolio {
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    fn sorted(mut self) -> Self {
        sort_rows(&mut self.experience);
        sort_rows(&mut self.education);
        sort_rows(&mut self.projects);
        self
    }
}

/// Store backed by a [`Portfolio`] held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryContentStore {
    content: Portfolio,
}

impl MemoryContentStore {
    pub fn new(content: Portfolio) -> Self {
        Self {
            content: content.sorted(),
        }
    }

    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Portfolio::from_yaml(yaml).map(Self::new)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let store = Portfolio::from_file(path).map(Self::new)?;
        tracing::info!(
            path = %path.display(),
            experience = store.content.experience.len(),
            education = store.content.education.len(),
            projects = store.content.projects.len(),
            "loaded content seed"
        );
        Ok(store)
    }

    pub fn content(&self) -> &Portfolio {
        &self.content
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn profile(&self) -> Result<Profile> {
        self.content
            .profile
            .clone()
            .ok_or(ContentError::NotFound(ContentKind::About))
    }

    async fn experience(&self) -> Result<Vec<Experience>> {
        Ok(self.content.experience.clone())
    }

    async fn education(&self) -> Result<Vec<Education>> {
        Ok(self.content.education.clone())
    }

    async fn projects(&self) -> Result<Vec<Project>> {
        Ok(self.content.projects.clone())
    }

    async fn health(&self) -> Result<()> {
        Ok(())
    }
}
