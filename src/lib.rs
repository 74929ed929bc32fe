//! Portfolio content layer.
//!
//! Content for the About, Experience, Education and Projects sections is read
//! through the [`ContentStore`] port. Two implementations exist:
//!
//! - [`MemoryContentStore`], seeded from a YAML document (tests, local runs)
//! - `PgContentStore`, plain ordered `SELECT`s over Postgres (feature `database`)
//!
//! ```
//! use folio::{ContentStore, MemoryContentStore};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let store = MemoryContentStore::from_yaml("projects: [{ name: folio, summary: This site }]").unwrap();
//! assert_eq!(store.projects().await.unwrap().len(), 1);
//! # }
//! ```

pub mod error;
pub mod models;
pub mod store;

#[cfg(feature = "database")]
pub mod database;

pub use error::ContentError;
pub use models::{ContentKind, Education, Experience, Profile, Project};
pub use store::{ContentStore, MemoryContentStore, Portfolio};

#[cfg(feature = "database")]
pub use database::{DatabaseConfig, PgContentStore};
