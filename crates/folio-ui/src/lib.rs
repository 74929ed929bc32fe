//! Browser shell for section navigation.
//!
//! The page marks its scroll container and sections with data attributes:
//!
//! ```html
//! <main data-folio-sections data-folio-config='{"routes": ["/", "/about"]}'>
//!   <section data-folio-section>...</section>
//!   <section data-folio-section>...</section>
//! </main>
//! ```
//!
//! On load the wasm entry point reads the config, mounts a
//! [`NavigationController`](folio_nav::NavigationController) over a DOM host
//! and forwards wheel, touch, key, link, popstate and intersection events to
//! it. Everything DOM-facing lives in `dom` and only builds for `wasm32`.

#[cfg(target_arch = "wasm32")]
mod dom;

use folio_nav::{NavConfig, NavError};

/// Scroll container.
pub const SECTIONS_SELECTOR: &str = "[data-folio-sections]";

/// One full-viewport section, in document order.
pub const SECTION_SELECTOR: &str = "[data-folio-section]";

/// JSON [`NavConfig`] on the container.
pub const CONFIG_ATTRIBUTE: &str = "data-folio-config";

/// Section index stamped on each section at mount.
pub const INDEX_ATTRIBUTE: &str = "data-folio-index";

/// `WheelEvent.deltaMode` values.
const DOM_DELTA_LINE: u32 = 1;
const DOM_DELTA_PAGE: u32 = 2;

/// Pixels per line for line-mode wheel deltas (Firefox).
const LINE_HEIGHT_PX: f64 = 16.0;

/// Build the navigation config for a page with `section_count` sections.
///
/// The section count always comes from the DOM, so a config whose routes
/// disagree with the markup fails validation instead of navigating to
/// sections that do not exist.
pub fn load_config(raw: Option<&str>, section_count: usize) -> Result<NavConfig, NavError> {
    let mut config = match raw {
        Some(json) if !json.trim().is_empty() => NavConfig::from_json(json)?,
        _ => NavConfig::new(Vec::<String>::new()),
    };
    config.section_count = Some(section_count);
    config.validate()?;
    Ok(config)
}

/// Normalise a wheel delta to pixels so gesture thresholds mean the same
/// thing in every browser.
pub fn wheel_delta_px(delta_y: f64, delta_mode: u32, viewport_height: f64) -> f32 {
    let px = match delta_mode {
        DOM_DELTA_LINE => delta_y * LINE_HEIGHT_PX,
        DOM_DELTA_PAGE => delta_y * viewport_height,
        _ => delta_y,
    };
    px as f32
}

/// IntersectionObserver thresholds: leaving view, and reaching the arrival ratio.
pub fn observer_thresholds(visibility_ratio: f32) -> [f64; 2] {
    [0.0, f64::from(visibility_ratio)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn config_from_markup() {
        let config = load_config(
            Some(r#"{ "routes": ["/", "/about", "/contact"], "fallback_ms": 1500 }"#),
            3,
        )
        .unwrap();
        assert_eq!(config.section_count(), 3);
        assert_eq!(config.fallback_ms, 1500);
    }

    #[test]
    fn markup_disagreeing_with_routes() {
        let err = load_config(Some(r#"{ "routes": ["/", "/about"] }"#), 3).unwrap_err();
        assert!(matches!(
            err,
            NavError::RouteCountMismatch {
                routes: 2,
                sections: 3
            }
        ));
    }

    #[test]
    fn missing_config() {
        assert!(matches!(load_config(None, 0), Err(NavError::EmptySections)));
        assert!(load_config(Some("  "), 2).is_err());
    }

    #[test]
    fn wheel_modes() {
        assert_eq!(wheel_delta_px(53.0, 0, 800.0), 53.0);
        assert_eq!(wheel_delta_px(3.0, DOM_DELTA_LINE, 800.0), 48.0);
        assert_eq!(wheel_delta_px(-1.0, DOM_DELTA_PAGE, 800.0), -800.0);
    }

    #[test]
    fn thresholds_follow_ratio() {
        assert_eq!(observer_thresholds(0.5), [0.0, 0.5]);
    }
}
