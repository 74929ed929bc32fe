//! Shared application state.

use folio::{ContentError, ContentStore, MemoryContentStore};
use std::sync::Arc;

use crate::config::ContentSource;

/// State handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Open the configured content store.
    pub async fn open(source: &ContentSource) -> Result<Self, ContentError> {
        let store: Arc<dyn ContentStore> = match source {
            #[cfg(feature = "database")]
            ContentSource::Database(url) => {
                let config = folio::DatabaseConfig::new(url.clone());
                Arc::new(folio::PgContentStore::connect(&config).await?)
            }
            ContentSource::File(path) => Arc::new(MemoryContentStore::from_file(path)?),
        };
        Ok(Self::new(store))
    }
}
