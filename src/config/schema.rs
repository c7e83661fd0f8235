//! Configuration schema definitions.
//!
//! This module defines the complete i18n configuration structure.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::localizer::LocalizationOptions;
use crate::routing::overrides::RouteOverrides;
use crate::routing::pages::{pages_resolver, PagesConfig};
use crate::routing::strategy::{Strategy, DEFAULT_ROUTES_NAME_SEPARATOR};

/// Locale used when the configuration names none.
pub const DEFAULT_LOCALE: &str = "en";

/// Root i18n configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct I18nConfig {
    /// Locale codes supported by the app, e.g. `["en", "fr"]`.
    pub locales: Vec<String>,

    /// The app's default locale. Also the fallback locale.
    pub default_locale: String,

    /// Routing strategy.
    pub strategy: Strategy,

    /// Whether generated paths end with a slash.
    pub trailing_slash: bool,

    /// Separator between route name and locale code.
    pub routes_name_separator: String,

    /// Emit an unprefixed copy of default-locale routes (`prefix` strategy only).
    pub include_unprefixed_fallback: bool,

    /// Custom paths per route name and locale.
    pub pages: PagesConfig,

    /// Path rewrites applied to the generated routes.
    pub route_overrides: RouteOverrides,

    /// Log the localized route table.
    pub logs: bool,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for I18nConfig {
    fn default() -> Self {
        Self {
            locales: Vec::new(),
            default_locale: DEFAULT_LOCALE.to_string(),
            strategy: Strategy::default(),
            trailing_slash: false,
            routes_name_separator: DEFAULT_ROUTES_NAME_SEPARATOR.to_string(),
            include_unprefixed_fallback: false,
            pages: PagesConfig::new(),
            route_overrides: RouteOverrides::new(),
            logs: false,
            observability: ObservabilityConfig::default(),
        }
    }
}

impl I18nConfig {
    /// Fill in a missing default locale or locale list.
    ///
    /// An empty default locale falls back to [`DEFAULT_LOCALE`]; an empty
    /// locale list falls back to the default locale alone.
    pub fn apply_fallbacks(&mut self) {
        if self.default_locale.is_empty() {
            tracing::warn!("Missing default locale, falling back to `{}`", DEFAULT_LOCALE);
            self.default_locale = DEFAULT_LOCALE.to_string();
        }

        if self.locales.is_empty() {
            tracing::warn!("Locales option is empty, falling back to using the default locale only");
            self.locales = vec![self.default_locale.clone()];
        }
    }

    /// Localization options for the route localizer.
    ///
    /// The `pages` table becomes the options resolver.
    pub fn localization_options(&self) -> LocalizationOptions {
        let mut options = LocalizationOptions::new(self.default_locale.clone(), self.locales.clone())
            .with_strategy(self.strategy)
            .with_trailing_slash(self.trailing_slash)
            .with_separator(self.routes_name_separator.clone())
            .with_unprefixed_fallback(self.include_unprefixed_fallback);

        if !self.pages.is_empty() {
            options.options_resolver = Some(pages_resolver(self.pages.clone()));
        }
        options
    }
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
