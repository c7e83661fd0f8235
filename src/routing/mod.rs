//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Discovered page tree (Route[])
//!     → setup.rs (build LocalizationOptions from config)
//!     → pages.rs (custom per-locale paths as options resolver)
//!     → localizer.rs (expand each route per locale)
//!         → strategy.rs (prefix eligibility, route names)
//!     → overrides.rs (rewrite generated paths)
//!     → table.rs (shared, hot-swappable result)
//!
//! Reverse lookup (navigation helpers):
//!     route name / path
//!     → matcher.rs (locale suffix / leading locale segment)
//! ```
//!
//! # Design Decisions
//! - Localization is a pure tree rebuild, the input is never mutated
//! - Strategies are a closed enum, hooks are injected closures
//! - Deterministic: same tree and config always yield the same output

pub mod localizer;
pub mod matcher;
pub mod overrides;
pub mod pages;
pub mod route;
pub mod setup;
pub mod strategy;
pub mod table;

pub use localizer::{
    adjust_path_for_trailing_slash, localize_routes, ComputedRouteOptions, LocalizationOptions,
    PrefixableContext,
};
pub use matcher::LocaleMatcher;
pub use route::Route;
pub use strategy::Strategy;
