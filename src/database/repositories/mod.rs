//! Database repositories module
//!
//! This module contains the repository implementations for data access

pub mod user;

// Re-export repositories
pub use user::UserRepository;
