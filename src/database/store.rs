//! User record store abstraction
//!
//! Handlers and the sweeper only see `Arc<dyn UserStore>`, so the PostgreSQL
//! repository and the in-memory store are interchangeable.

use std::sync::Arc;
use async_trait::async_trait;
use crate::i18n::Language;
use crate::models::{JoinMethod, UserRecord};
use crate::utils::errors::Result;

/// Shared store handle injected into handlers and background tasks
pub type SharedUserStore = Arc<dyn UserStore>;

/// Persistence for per-user language preference and access state
///
/// Every write is a single atomic upsert keyed by Telegram id; concurrent
/// writes for the same user resolve as last-write-wins.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Stored language, or the store's default when the user or language is absent
    async fn get_language(&self, telegram_id: i64) -> Result<Language>;

    /// Create the record without a grant, or update only its language
    async fn set_language(&self, telegram_id: i64, language: Language) -> Result<()>;

    /// Overwrite the grant fields with a fresh `duration_days` grant starting now
    async fn grant_access(
        &self,
        telegram_id: i64,
        language: Language,
        duration_days: i64,
        method: JoinMethod,
    ) -> Result<UserRecord>;

    /// Ids whose non-null expiry is strictly before `as_of`
    async fn list_expired(&self, as_of: i64) -> Result<Vec<i64>>;

    async fn find(&self, telegram_id: i64) -> Result<Option<UserRecord>>;
}
