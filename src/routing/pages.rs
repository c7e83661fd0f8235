//! Custom page paths.
//!
//! The `pages` configuration maps a route name to a custom path per locale:
//!
//! ```toml
//! [pages.about]
//! de = "/ueber-uns"
//! fr = "/a-propos"
//! ```
//!
//! The table is flattened into a [`RouteOptionsResolver`] so the localizer
//! itself never has to look anything up.

use std::collections::HashMap;
use std::sync::Arc;

use crate::routing::localizer::{ComputedRouteOptions, RouteOptionsResolver};
use crate::routing::route::Route;

/// Route name → locale → custom path.
pub type PagesConfig = HashMap<String, HashMap<String, String>>;

/// Build an options resolver from the `pages` table.
///
/// Routes listed in the table get their custom paths; every other route is
/// localized with the inherited locales and its own path.
pub fn pages_resolver(pages: PagesConfig) -> RouteOptionsResolver {
    Arc::new(move |route: &Route, _allowed: &[String]| {
        let paths = route
            .name
            .as_deref()
            .and_then(|name| pages.get(name))
            .cloned()
            .unwrap_or_default();

        Some(ComputedRouteOptions {
            locales: Vec::new(),
            paths,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::localizer::{localize_routes, LocalizationOptions};

    fn pages() -> PagesConfig {
        HashMap::from([(
            "about".to_string(),
            HashMap::from([("de".to_string(), "/ueber-uns".to_string())]),
        )])
    }

    #[test]
    fn test_known_page_gets_paths() {
        let resolver = pages_resolver(pages());
        let options = resolver(&Route::new("about", "/about"), &[]).unwrap();
        assert!(options.locales.is_empty());
        assert_eq!(options.paths.get("de").map(String::as_str), Some("/ueber-uns"));
    }

    #[test]
    fn test_unknown_and_unnamed_pages_unrestricted() {
        let resolver = pages_resolver(pages());
        assert_eq!(
            resolver(&Route::new("contact", "/contact"), &[]),
            Some(ComputedRouteOptions::default())
        );
        assert_eq!(resolver(&Route::default(), &[]), Some(ComputedRouteOptions::default()));
    }

    #[test]
    fn test_localize_with_pages() {
        let mut options = LocalizationOptions::new("en", ["en", "de"]);
        options.options_resolver = Some(pages_resolver(pages()));

        let out = localize_routes(&[Route::new("about", "/about")], &options);
        let paths: Vec<_> = out.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["/about", "/de/ueber-uns"]);
    }
}
