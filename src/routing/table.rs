//! Shared localized route table.
//!
//! # Responsibilities
//! - Keep the discovered page tree and its localized form together
//! - Swap in a freshly localized tree when the configuration changes
//!
//! # Design Decisions
//! - Readers take a lock-free snapshot via `ArcSwap`
//! - A reload rebuilds the whole tree; nothing is patched in place

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::I18nConfig;
use crate::routing::route::{walk_all, Route};
use crate::routing::setup::setup_pages;

/// Localized routes, rebuilt atomically on configuration change.
pub struct RouteTable {
    source: Vec<Route>,
    localized: ArcSwap<Vec<Route>>,
}

impl RouteTable {
    /// Localize `source` with `config`.
    pub fn build(source: Vec<Route>, config: &I18nConfig) -> Self {
        let localized = setup_pages(&source, config);
        Self {
            source,
            localized: ArcSwap::from_pointee(localized),
        }
    }

    /// The discovered, unlocalized tree.
    pub fn source(&self) -> &[Route] {
        &self.source
    }

    /// Current localized tree.
    pub fn snapshot(&self) -> Arc<Vec<Route>> {
        self.localized.load_full()
    }

    /// Re-localize the source tree with a new configuration.
    ///
    /// Returns the number of top-level localized routes.
    pub fn reload(&self, config: &I18nConfig) -> usize {
        let localized = setup_pages(&self.source, config);
        let count = localized.len();
        self.localized.store(Arc::new(localized));
        tracing::info!(routes = count, strategy = %config.strategy, "Route table reloaded");
        count
    }

    /// Find a localized route by name at any depth.
    pub fn find_by_name(&self, name: &str) -> Option<Route> {
        let snapshot = self.localized.load_full();
        let found = walk_all(&snapshot)
            .find(|route| route.name.as_deref() == Some(name))
            .cloned();
        found
    }
}
