//! Route table and location parsing.

use crate::error::NavError;
use crate::INSTANT_QUERY_PARAM;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use url::Url;

/// Placeholder origin for resolving root-relative hrefs.
const LOCATION_BASE: &str = "http://localhost/";

/// Ordered mapping between section indices and route paths.
///
/// Lookups are unambiguous in both directions: construction rejects
/// duplicate paths (after normalisation) and a count mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<String>,
    by_path: HashMap<String, usize>,
}

impl RouteTable {
    pub fn new<I, S>(routes: I, section_count: usize) -> Result<Self, NavError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if section_count == 0 {
            return Err(NavError::EmptySections);
        }

        let routes: Vec<String> = routes.into_iter().map(Into::into).collect();
        if routes.len() != section_count {
            return Err(NavError::RouteCountMismatch {
                routes: routes.len(),
                sections: section_count,
            });
        }

        let mut by_path = HashMap::with_capacity(routes.len());
        for (index, route) in routes.iter().enumerate() {
            if !route.starts_with('/') {
                return Err(NavError::InvalidRoute(route.clone()));
            }
            let key = normalize_path(route).to_string();
            if by_path.insert(key, index).is_some() {
                return Err(NavError::DuplicateRoute(route.clone()));
            }
        }

        Ok(Self { routes, by_path })
    }

    /// Number of sections (and routes).
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    pub fn path_for(&self, index: usize) -> Option<&str> {
        self.routes.get(index).map(String::as_str)
    }

    /// Section index for a path. `/about/` and `/about` are the same route.
    pub fn index_for(&self, path: &str) -> Option<usize> {
        self.by_path.get(normalize_path(path)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.routes.iter().map(String::as_str).enumerate()
    }
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// The parts of a browser location that navigation cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub path: String,
    /// `?instant=true` was present.
    pub instant: bool,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            instant: false,
        }
    }

    /// Parse an absolute URL or a root-relative href such as
    /// `/about?instant=true`.
    pub fn parse(href: &str) -> Result<Self, NavError> {
        let invalid = |source| NavError::InvalidLocation {
            href: href.to_string(),
            source,
        };
        let base = Url::parse(LOCATION_BASE).map_err(invalid)?;
        let url = Url::options()
            .base_url(Some(&base))
            .parse(href)
            .map_err(invalid)?;

        let instant = url
            .query_pairs()
            .any(|(key, value)| key == INSTANT_QUERY_PARAM && value == "true");

        Ok(Self {
            path: url.path().to_string(),
            instant,
        })
    }
}
