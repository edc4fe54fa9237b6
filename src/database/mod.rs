//! Database module
//!
//! This module handles database connections and the user record store

pub mod connection;
pub mod memory;
pub mod repositories;
pub mod store;

// Re-export commonly used database components
pub use connection::{DatabasePool, DatabaseConfig, create_pool, run_migrations};
pub use memory::MemoryUserStore;
pub use repositories::UserRepository;
pub use store::{SharedUserStore, UserStore};
