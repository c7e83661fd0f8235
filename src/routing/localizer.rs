//! Route localization engine.
//!
//! # Responsibilities
//! - Expand every page route into one route per allowed locale
//! - Thread a single locale through each localized subtree
//! - Apply custom per-locale paths, locale prefixes and trailing slashes
//! - Derive locale-suffixed route names
//!
//! # Design Decisions
//! - Pure function: the input tree is never mutated, the output is rebuilt
//! - Children are localized with their parent's single locale, so a child can
//!   only ever be restricted further, never widened
//! - Redirect stubs and resolver-excluded routes pass through untouched
//! - Hooks (`prefixable`, `options_resolver`) are injected closures

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use crate::routing::route::{walk_all, Route};
use crate::routing::strategy::{
    Strategy, DEFAULT_LOCALE_ROUTE_NAME_SUFFIX, DEFAULT_ROUTES_NAME_SEPARATOR,
};

/// Input to the prefix-eligibility hook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrefixableContext<'a> {
    pub current_locale: &'a str,
    pub default_locale: &'a str,
    pub is_child: bool,
    pub path: &'a str,
}

/// Per-route localization overrides returned by a [`RouteOptionsResolver`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputedRouteOptions {
    /// Locales this route is restricted to. Empty means no restriction.
    pub locales: Vec<String>,
    /// Custom path per locale code.
    pub paths: HashMap<String, String>,
}

/// Decides whether a locale/route pair receives a `/<locale>` prefix.
pub type Prefixable = Arc<dyn Fn(&PrefixableContext<'_>) -> bool + Send + Sync>;

/// Resolves per-route options. Returning `None` skips localization of the route.
pub type RouteOptionsResolver =
    Arc<dyn Fn(&Route, &[String]) -> Option<ComputedRouteOptions> + Send + Sync>;

/// Options for [`localize_routes`]. Immutable for the duration of one call.
#[derive(Clone)]
pub struct LocalizationOptions {
    pub default_locale: String,
    pub locales: Vec<String>,
    pub trailing_slash: bool,
    pub routes_name_separator: String,
    pub strategy: Strategy,
    /// Under [`Strategy::Prefix`], also emit an unprefixed copy of the
    /// default-locale routes.
    pub include_unprefixed_fallback: bool,
    /// Overrides the strategy's prefix policy when set.
    pub prefixable: Option<Prefixable>,
    pub options_resolver: Option<RouteOptionsResolver>,
}

impl Default for LocalizationOptions {
    fn default() -> Self {
        Self {
            default_locale: String::new(),
            locales: Vec::new(),
            trailing_slash: false,
            routes_name_separator: DEFAULT_ROUTES_NAME_SEPARATOR.to_string(),
            strategy: Strategy::default(),
            include_unprefixed_fallback: false,
            prefixable: None,
            options_resolver: None,
        }
    }
}

impl fmt::Debug for LocalizationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LocalizationOptions")
            .field("default_locale", &self.default_locale)
            .field("locales", &self.locales)
            .field("trailing_slash", &self.trailing_slash)
            .field("routes_name_separator", &self.routes_name_separator)
            .field("strategy", &self.strategy)
            .field("include_unprefixed_fallback", &self.include_unprefixed_fallback)
            .field("prefixable", &self.prefixable.is_some())
            .field("options_resolver", &self.options_resolver.is_some())
            .finish()
    }
}

impl LocalizationOptions {
    pub fn new<I, S>(default_locale: impl Into<String>, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            default_locale: default_locale.into(),
            locales: locales.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_trailing_slash(mut self, trailing_slash: bool) -> Self {
        self.trailing_slash = trailing_slash;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.routes_name_separator = separator.into();
        self
    }

    pub fn with_unprefixed_fallback(mut self, include: bool) -> Self {
        self.include_unprefixed_fallback = include;
        self
    }

    pub fn with_prefixable<F>(mut self, prefixable: F) -> Self
    where
        F: Fn(&PrefixableContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.prefixable = Some(Arc::new(prefixable));
        self
    }

    pub fn with_options_resolver<F>(mut self, resolver: F) -> Self
    where
        F: Fn(&Route, &[String]) -> Option<ComputedRouteOptions> + Send + Sync + 'static,
    {
        self.options_resolver = Some(Arc::new(resolver));
        self
    }
}

/// Localize a route tree.
///
/// Every page route is expanded into one route per locale, in locale order.
/// Sibling and child order is preserved. Under [`Strategy::NoPrefix`] the
/// tree is returned unchanged.
pub fn localize_routes(routes: &[Route], options: &LocalizationOptions) -> Vec<Route> {
    let span = tracing::debug_span!(
        "localize_routes",
        strategy = %options.strategy,
        default_locale = %options.default_locale,
    );
    let _enter = span.enter();

    if options.strategy == Strategy::NoPrefix {
        debug!("Strategy is no_prefix, routes left unlocalized");
        return routes.to_vec();
    }

    let locales = dedup_locales(&options.locales);
    let localizer = Localizer { options };

    let localized: Vec<Route> = routes
        .iter()
        .flat_map(|route| localizer.expand(route, &locales, false, false))
        .collect();

    debug!(
        input_routes = walk_all(routes).count(),
        output_routes = walk_all(&localized).count(),
        locales = locales.len(),
        "Routes localized"
    );
    localized
}

/// Normalize the trailing slash of a route path.
///
/// Trailing slashes are stripped, then a single one is appended when
/// `trailing_slash` is set. An empty result becomes `/`, except for a relative
/// child segment, which stays empty.
pub fn adjust_path_for_trailing_slash(
    path: &str,
    trailing_slash: bool,
    is_child_with_relative_path: bool,
) -> String {
    let mut adjusted = path.trim_end_matches('/').to_string();
    if trailing_slash {
        adjusted.push('/');
    }

    if adjusted.is_empty() && !is_child_with_relative_path {
        adjusted.push('/');
    }
    adjusted
}

/// Remove repeated locale codes, keeping the first occurrence.
fn dedup_locales(locales: &[String]) -> Vec<String> {
    let mut unique: Vec<String> = Vec::with_capacity(locales.len());
    for locale in locales {
        if unique.contains(locale) {
            warn!(locale = %locale, "Duplicate locale in configuration, ignoring repeat");
            continue;
        }
        unique.push(locale.clone());
    }
    unique
}

struct Localizer<'a> {
    options: &'a LocalizationOptions,
}

impl Localizer<'_> {
    fn expand(
        &self,
        route: &Route,
        allowed_locales: &[String],
        is_child: bool,
        is_extra_tree: bool,
    ) -> Vec<Route> {
        if route.is_redirect_only() {
            trace!(redirect = ?route.redirect, "Redirect route left unlocalized");
            return vec![route.clone()];
        }

        let route_options = match &self.options.options_resolver {
            Some(resolver) => match resolver(route, allowed_locales) {
                Some(resolved) => Some(resolved),
                None => {
                    debug!(route = ?route.name, path = %route.path, "Route excluded from localization");
                    return vec![route.clone()];
                }
            },
            None => None,
        };

        let (locales, paths) = effective_options(route_options, allowed_locales);
        if locales.is_empty() {
            debug!(route = ?route.name, path = %route.path, "No locale left for route, dropped");
            return Vec::new();
        }

        let mut localized = Vec::with_capacity(locales.len());
        for locale in &locales {
            self.localize_for(route, locale, &paths, is_child, is_extra_tree, &mut localized);
        }
        localized
    }

    fn localize_for(
        &self,
        route: &Route,
        locale: &str,
        paths: &HashMap<String, String>,
        is_child: bool,
        is_extra_tree: bool,
        out: &mut Vec<Route>,
    ) {
        let options = self.options;
        let separator = options.routes_name_separator.as_str();

        let mut localized = route.shallow_clone();
        if let Some(name) = &route.name {
            let mut localized_name = options.strategy.localized_name(name, locale, separator);
            if is_extra_tree {
                localized_name.push_str(separator);
                localized_name.push_str(DEFAULT_LOCALE_ROUTE_NAME_SUFFIX);
            }
            localized.name = Some(localized_name);
        }

        let child_locales = [locale.to_string()];
        localized.children = route
            .children
            .iter()
            .flat_map(|child| self.expand(child, &child_locales, true, is_extra_tree))
            .collect();

        let path = paths
            .get(locale)
            .filter(|custom| !custom.is_empty())
            .map(String::as_str)
            .unwrap_or(route.path.as_str());
        let is_child_with_relative_path = is_child && !path.starts_with('/');

        let ctx = PrefixableContext {
            current_locale: locale,
            default_locale: &options.default_locale,
            is_child,
            path,
        };
        let should_add_prefix = !is_extra_tree && self.prefixable(&ctx);

        let full_path = if should_add_prefix {
            format!("/{locale}{path}")
        } else {
            path.to_string()
        };
        localized.path = if full_path.is_empty() {
            adjust_path_for_trailing_slash("", false, is_child_with_relative_path)
        } else {
            adjust_path_for_trailing_slash(&full_path, options.trailing_slash, is_child_with_relative_path)
        };

        trace!(name = ?localized.name, path = %localized.path, locale, "Localized route");
        out.push(localized);

        if !is_child && !is_extra_tree && self.needs_default_copy(locale, should_add_prefix) {
            self.localize_for(route, locale, paths, is_child, true, out);
        }
    }

    fn prefixable(&self, ctx: &PrefixableContext<'_>) -> bool {
        match &self.options.prefixable {
            Some(prefixable) => prefixable(ctx),
            None => self.options.strategy.prefixable(ctx),
        }
    }

    /// Whether a top-level default-locale route also gets an unprefixed copy.
    fn needs_default_copy(&self, locale: &str, prefixed: bool) -> bool {
        if locale != self.options.default_locale {
            return false;
        }
        match self.options.strategy {
            Strategy::PrefixAndDefault => true,
            Strategy::Prefix => self.options.include_unprefixed_fallback && prefixed,
            _ => false,
        }
    }
}

/// Combine the inherited locale set with resolver overrides.
///
/// The result is always a subset of `allowed_locales`, in its order.
fn effective_options(
    route_options: Option<ComputedRouteOptions>,
    allowed_locales: &[String],
) -> (Vec<String>, HashMap<String, String>) {
    let Some(route_options) = route_options else {
        return (allowed_locales.to_vec(), HashMap::new());
    };

    let locales = if route_options.locales.is_empty() {
        allowed_locales.to_vec()
    } else {
        allowed_locales
            .iter()
            .filter(|locale| route_options.locales.contains(locale))
            .cloned()
            .collect()
    };
    (locales, route_options.paths)
}
