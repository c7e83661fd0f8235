//! Reverse locale lookup.
//!
//! # Responsibilities
//! - Recover the locale embedded in a localized route name (`about___de`)
//! - Recover the locale embedded in a prefixed path (`/de/about`)
//! - Rewrite a path for another locale
//!
//! # Design Decisions
//! - Mirrors the naming and prefixing rules of the localizer exactly
//! - Regexes compiled once per matcher, matching is case-insensitive
//! - A named route is resolved by name only, an unnamed one by path
//! - Without any non-empty locale code nothing matches

use regex::{Regex, RegexBuilder};

use crate::routing::route::Route;

/// Extracts locale codes from localized route names and paths.
#[derive(Debug, Clone)]
pub struct LocaleMatcher {
    name_regex: Option<Regex>,
    path_regex: Option<Regex>,
}

impl LocaleMatcher {
    /// Compile a matcher for the given locale codes and name separator.
    ///
    /// Empty locale codes are ignored.
    pub fn new<S: AsRef<str>>(locales: &[S], separator: &str) -> Result<Self, regex::Error> {
        let codes: Vec<String> = locales
            .iter()
            .map(AsRef::<str>::as_ref)
            .filter(|locale| !locale.is_empty())
            .map(regex::escape)
            .collect();
        if codes.is_empty() {
            return Ok(Self {
                name_regex: None,
                path_regex: None,
            });
        }
        let alternatives = codes.join("|");

        let name_regex = RegexBuilder::new(&format!("{}({alternatives})$", regex::escape(separator)))
            .case_insensitive(true)
            .build()?;
        let path_regex = RegexBuilder::new(&format!("^/({alternatives})(?:/|$)"))
            .case_insensitive(true)
            .build()?;

        Ok(Self {
            name_regex: Some(name_regex),
            path_regex: Some(path_regex),
        })
    }

    /// Locale suffix of a localized route name.
    pub fn locale_from_name(&self, name: &str) -> Option<String> {
        capture(self.name_regex.as_ref()?, name)
    }

    /// Leading locale segment of a path.
    pub fn locale_from_path(&self, path: &str) -> Option<String> {
        capture(self.path_regex.as_ref()?, path)
    }

    /// Locale of a route: from its name when it has one, otherwise its path.
    pub fn locale_from_route(&self, route: &Route) -> Option<String> {
        match route.name.as_deref() {
            Some(name) if !name.is_empty() => self.locale_from_name(name),
            _ if !route.path.is_empty() => self.locale_from_path(&route.path),
            _ => None,
        }
    }
}

fn capture(regex: &Regex, haystack: &str) -> Option<String> {
    regex
        .captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Name of the route generated for `locale`. A missing name renders as `(null)`.
pub fn locale_route_name(name: Option<&str>, locale: &str, separator: &str) -> String {
    format!("{}{separator}{locale}", name.unwrap_or("(null)"))
}

/// Rewrite `path` for `target_locale`.
///
/// A leading known-locale segment is replaced; the default locale gets no
/// prefix at all.
pub fn localize_path<S: AsRef<str>>(
    path: &str,
    target_locale: &str,
    locales: &[S],
    default_locale: &str,
) -> String {
    let stripped = path.strip_prefix('/').unwrap_or(path);
    let mut segments: Vec<&str> = stripped.split('/').collect();

    let has_locale = segments
        .first()
        .is_some_and(|first| locales.iter().any(|locale| locale.as_ref() == *first));
    if has_locale {
        segments.remove(0);
    }

    if target_locale != default_locale {
        segments.insert(0, target_locale);
    }

    format!("/{}", segments.join("/"))
}
