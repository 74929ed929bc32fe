//! Navigation configuration.

use crate::error::NavError;
use crate::routes::RouteTable;
use crate::{DEFAULT_FALLBACK_MS, DEFAULT_VISIBILITY_RATIO};
use folio_input::InputConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything the controller needs besides its host.
///
/// Typically embedded in the page as JSON:
///
/// ```
/// use folio_nav::NavConfig;
///
/// let config = NavConfig::from_json(r#"{ "routes": ["/", "/about", "/contact"] }"#).unwrap();
/// assert_eq!(config.section_count(), 3);
/// assert_eq!(config.fallback_ms, 1_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    /// One path per section, in section order.
    pub routes: Vec<String>,

    /// Number of sections. Defaults to `routes.len()`.
    #[serde(default)]
    pub section_count: Option<usize>,

    /// Visible fraction at which a section counts as reached.
    #[serde(default = "default_visibility_ratio")]
    pub visibility_ratio: f32,

    /// Time after which an unconfirmed transition is force-resolved (ms).
    #[serde(default = "default_fallback_ms")]
    pub fallback_ms: u64,

    #[serde(default)]
    pub input: InputConfig,
}

fn default_visibility_ratio() -> f32 {
    DEFAULT_VISIBILITY_RATIO
}

fn default_fallback_ms() -> u64 {
    DEFAULT_FALLBACK_MS
}

impl NavConfig {
    pub fn new<I, S>(routes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            routes: routes.into_iter().map(Into::into).collect(),
            section_count: None,
            visibility_ratio: DEFAULT_VISIBILITY_RATIO,
            fallback_ms: DEFAULT_FALLBACK_MS,
            input: InputConfig::default(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, NavError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn section_count(&self) -> usize {
        self.section_count.unwrap_or(self.routes.len())
    }

    pub fn fallback(&self) -> Duration {
        Duration::from_millis(self.fallback_ms)
    }

    /// Validate and build the route table.
    pub fn route_table(&self) -> Result<RouteTable, NavError> {
        RouteTable::new(self.routes.iter().cloned(), self.section_count())
    }

    pub fn validate(&self) -> Result<(), NavError> {
        self.route_table()?;
        if !(self.visibility_ratio > 0.0 && self.visibility_ratio <= 1.0) {
            return Err(NavError::InvalidVisibilityRatio(self.visibility_ratio));
        }
        self.input.validate()?;
        Ok(())
    }
}
