//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → schema.rs (fallbacks for missing default locale / locale list)
//!     → validation.rs (semantic checks)
//!     → I18nConfig (validated, immutable)
//!     → LocalizationOptions for the route localizer
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → new config sent to the route table for re-localization
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::ConfigError;
pub use schema::I18nConfig;
pub use schema::ObservabilityConfig;
pub use validation::ValidationError;
