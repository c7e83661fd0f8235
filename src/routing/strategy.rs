//! Routing strategies.
//!
//! A strategy decides whether a localized route gets a `/<locale>` path
//! prefix and whether its name carries a locale suffix.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::routing::localizer::PrefixableContext;

/// Separator between a base route name and its locale suffix.
pub const DEFAULT_ROUTES_NAME_SEPARATOR: &str = "___";

/// Extra name token for the unprefixed default-locale copy under
/// [`Strategy::PrefixAndDefault`].
pub const DEFAULT_LOCALE_ROUTE_NAME_SUFFIX: &str = "default";

/// Route localization strategy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Routes are left as they are. No prefix, no suffix.
    NoPrefix,
    /// Every locale, default included, is prefixed.
    Prefix,
    /// Every locale except the default one is prefixed.
    #[default]
    PrefixExceptDefault,
    /// Like `PrefixExceptDefault`, plus an extra default-locale copy.
    PrefixAndDefault,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::NoPrefix,
        Strategy::Prefix,
        Strategy::PrefixExceptDefault,
        Strategy::PrefixAndDefault,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::NoPrefix => "no_prefix",
            Strategy::Prefix => "prefix",
            Strategy::PrefixExceptDefault => "prefix_except_default",
            Strategy::PrefixAndDefault => "prefix_and_default",
        }
    }

    /// Default prefix eligibility for this strategy.
    ///
    /// A child with a relative path never gets a prefix: it inherits the
    /// prefix of its parent.
    pub fn prefixable(&self, ctx: &PrefixableContext<'_>) -> bool {
        let is_default_locale = ctx.current_locale == ctx.default_locale;
        let is_child_with_relative_path = ctx.is_child && !ctx.path.starts_with('/');

        match self {
            Strategy::NoPrefix => false,
            Strategy::Prefix => !is_child_with_relative_path,
            Strategy::PrefixExceptDefault | Strategy::PrefixAndDefault => {
                !is_child_with_relative_path && !is_default_locale
            }
        }
    }

    /// Name of the route generated for `locale`.
    pub fn localized_name(&self, base: &str, locale: &str, separator: &str) -> String {
        match self {
            Strategy::NoPrefix => base.to_string(),
            _ => format!("{base}{separator}{locale}"),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown strategy name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown routing strategy `{0}`")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| UnknownStrategy(s.to_string()))
    }
}
