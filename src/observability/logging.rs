//! Structured logging.
//!
//! # Responsibilities
//! - Initialize logging subsystem
//! - Log the localized route table when requested
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - `RUST_LOG` wins over the configured level

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::routing::route::Route;

/// Install the global tracing subscriber.
///
/// Does nothing if a subscriber is already installed.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("route_i18n={level}").into());

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}

/// Emit one `info` event per route, depth first.
pub fn log_route_table(routes: &[Route]) {
    tracing::info!(count = routes.len(), "Localized routes");
    for route in routes {
        log_route(route, 0);
    }
}

fn log_route(route: &Route, depth: usize) {
    tracing::info!(
        name = route.name.as_deref().unwrap_or("-"),
        path = %route.path,
        depth,
        "route"
    );
    for child in &route.children {
        log_route(child, depth + 1);
    }
}
