//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (config fallbacks, reloads, localization summaries)
//!     → logging.rs (subscriber setup, route table dump)
//!
//! Consumers:
//!     → stderr (stdout is reserved for the localized route tree)
//! ```

pub mod logging;
