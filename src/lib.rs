//! StarPass Telegram Bot
//!
//! A Telegram bot that sells time-boxed access to a private channel.
//! This library provides the message catalog, the user record store, the
//! command/callback router and the expiry sweeper that removes users whose
//! access has lapsed.

#![allow(non_snake_case)]

pub mod config;
pub mod handlers;
pub mod services;
pub mod models;
pub mod database;
pub mod i18n;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{StarPassError, Result};

// Re-export main components for easy access
pub use database::{UserRepository, UserStore, MemoryUserStore};
pub use services::{ServiceFactory, ExpirySweeper, SweeperHandle};
pub use i18n::{Catalog, Language};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
