//! Navigation configuration errors.
//!
//! Runtime navigation never fails: invalid requests are rejected as values
//! (see [`crate::Rejection`]). These errors only come out of setup.

use folio_input::InputError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NavError {
    #[error("No sections to navigate")]
    EmptySections,

    #[error("Route count {routes} does not match section count {sections}")]
    RouteCountMismatch { routes: usize, sections: usize },

    #[error("Invalid route '{0}': paths must start with '/'")]
    InvalidRoute(String),

    #[error("Duplicate route '{0}'")]
    DuplicateRoute(String),

    #[error("Visibility ratio {0} must be in (0, 1]")]
    InvalidVisibilityRatio(f32),

    #[error("Invalid location '{href}': {source}")]
    InvalidLocation {
        href: String,
        #[source]
        source: url::ParseError,
    },

    #[error(transparent)]
    Input(#[from] InputError),

    #[error("Invalid navigation config: {0}")]
    Config(#[from] serde_json::Error),
}
