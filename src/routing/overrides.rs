//! Post-localization route overrides.
//!
//! Overrides rewrite the path of generated routes, e.g. to serve the `en`
//! catch-all page from the unprefixed catch-all pattern:
//!
//! ```toml
//! [route_overrides]
//! "/en/:id(.*)*" = "/:id(.*)*"
//! ```

use std::collections::HashMap;

use tracing::debug;

use crate::routing::route::Route;

/// Generated path → replacement path.
pub type RouteOverrides = HashMap<String, String>;

/// Rewrite every route whose path exactly matches an override key.
///
/// Applies at any depth. Returns the number of rewritten routes.
pub fn apply_route_overrides(routes: &mut [Route], overrides: &RouteOverrides) -> usize {
    if overrides.is_empty() {
        return 0;
    }

    let mut rewritten = 0;
    for route in routes.iter_mut() {
        if let Some(replacement) = overrides.get(&route.path) {
            debug!(
                route = ?route.name,
                from = %route.path,
                to = %replacement,
                "Route path overridden"
            );
            route.path = replacement.clone();
            rewritten += 1;
        }
        rewritten += apply_route_overrides(&mut route.children, overrides);
    }
    rewritten
}
