//! Localized pages pipeline.
//!
//! Turns the discovered page tree into the tree handed to the router:
//! localize with the configured strategy and custom paths, apply route
//! overrides, optionally log the result.

use crate::config::schema::I18nConfig;
use crate::observability::logging::log_route_table;
use crate::routing::localizer::localize_routes;
use crate::routing::overrides::apply_route_overrides;
use crate::routing::route::Route;

/// Localize `routes` according to `config`.
pub fn setup_pages(routes: &[Route], config: &I18nConfig) -> Vec<Route> {
    let options = config.localization_options();
    let mut localized = localize_routes(routes, &options);

    let rewritten = apply_route_overrides(&mut localized, &config.route_overrides);
    if rewritten > 0 {
        tracing::debug!(rewritten, "Route overrides applied");
    }

    if config.logs {
        log_route_table(&localized);
    }
    localized
}
