//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod user;
pub mod plan;

// Re-export commonly used models
pub use user::{UserRecord, SubscriptionStatus, JoinMethod, SECONDS_PER_DAY, expiry_after};
pub use plan::{Plan, AccessGrant, DIRECT_PASS_DAYS};
