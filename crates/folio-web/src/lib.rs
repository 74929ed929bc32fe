//! Portfolio web server.
//!
//! Serves the section content as JSON under `/api` and the built single-page
//! site for every other path.

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ContentSource, ServerConfig};
pub use error::ApiError;
pub use router::{build_router, with_middleware, with_static_files};
pub use state::AppState;
