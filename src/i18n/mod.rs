//! Internationalization module
//!
//! This module holds the supported display languages and the static
//! message catalog used by every handler.

pub mod catalog;
pub mod language;

// Re-export commonly used i18n components
pub use catalog::{Catalog, MessagePack, PlanOption};
pub use language::{Language, LANGUAGE_PROMPT};
