//! Locale-aware route generation.
//!
//! Expands a page route tree into one route per supported locale, with
//! locale path prefixes, per-locale custom paths and locale-suffixed names.

pub mod config;
pub mod observability;
pub mod routing;

pub use config::I18nConfig;
pub use routing::{localize_routes, LocalizationOptions, Route, Strategy};
