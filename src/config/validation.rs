//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (pages reference configured locales)
//! - Detect locale lists the localizer cannot expand reliably
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: I18nConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::I18nConfig;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("locale list contains an empty locale code")]
    EmptyLocale,

    #[error("locale code `{0}` must not contain `/` or whitespace")]
    InvalidLocale(String),

    #[error("locale `{0}` is listed more than once")]
    DuplicateLocale(String),

    #[error("default locale `{0}` is not in the locale list")]
    UnknownDefaultLocale(String),

    #[error("routes name separator must not be empty")]
    EmptySeparator,

    #[error("pages entry `{page}` references unknown locale `{locale}`")]
    UnknownPageLocale { page: String, locale: String },

    #[error("pages entry `{page}` path `{path}` for locale `{locale}` must start with `/`")]
    RelativePagePath {
        page: String,
        locale: String,
        path: String,
    },

    #[error("route override `{0}` must start with `/`")]
    RelativeOverride(String),
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &I18nConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let mut seen: Vec<&str> = Vec::with_capacity(config.locales.len());
    for locale in &config.locales {
        if locale.is_empty() {
            errors.push(ValidationError::EmptyLocale);
        } else if locale.contains('/') || locale.chars().any(char::is_whitespace) {
            errors.push(ValidationError::InvalidLocale(locale.clone()));
        }

        if seen.contains(&locale.as_str()) {
            errors.push(ValidationError::DuplicateLocale(locale.clone()));
        } else {
            seen.push(locale);
        }
    }

    if !config.locales.contains(&config.default_locale) {
        errors.push(ValidationError::UnknownDefaultLocale(config.default_locale.clone()));
    }

    if config.routes_name_separator.is_empty() {
        errors.push(ValidationError::EmptySeparator);
    }

    // Sorted so the error order is stable across runs.
    let mut pages: Vec<_> = config.pages.iter().collect();
    pages.sort_by(|a, b| a.0.cmp(b.0));
    for (page, paths) in pages {
        let mut paths: Vec<_> = paths.iter().collect();
        paths.sort_by(|a, b| a.0.cmp(b.0));
        for (locale, path) in paths {
            if !config.locales.contains(locale) {
                errors.push(ValidationError::UnknownPageLocale {
                    page: page.clone(),
                    locale: locale.clone(),
                });
            }
            if !path.starts_with('/') {
                errors.push(ValidationError::RelativePagePath {
                    page: page.clone(),
                    locale: locale.clone(),
                    path: path.clone(),
                });
            }
        }
    }

    let mut overrides: Vec<_> = config.route_overrides.keys().collect();
    overrides.sort();
    for key in overrides {
        if !key.starts_with('/') {
            errors.push(ValidationError::RelativeOverride(key.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
