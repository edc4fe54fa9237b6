//! In-process user store
//!
//! Same semantics as the PostgreSQL repository, held in a map. Used by the
//! handler and sweeper test suites.

use std::collections::HashMap;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use crate::database::store::UserStore;
use crate::i18n::Language;
use crate::models::user::{expiry_after, JoinMethod, SubscriptionStatus, UserRecord};
use crate::utils::errors::Result;

#[derive(Debug, Default)]
pub struct MemoryUserStore {
    records: RwLock<HashMap<i64, UserRecord>>,
    default_language: Language,
}

impl MemoryUserStore {
    pub fn new(default_language: Language) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            default_language,
        }
    }

    /// Insert or replace a raw record
    pub async fn insert(&self, telegram_id: i64, record: UserRecord) {
        self.records.write().await.insert(telegram_id, record);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_language(&self, telegram_id: i64) -> Result<Language> {
        let records = self.records.read().await;
        let code = records.get(&telegram_id).and_then(|r| r.language.as_deref());
        Ok(Language::resolve(code, self.default_language))
    }

    async fn set_language(&self, telegram_id: i64, language: Language) -> Result<()> {
        let mut records = self.records.write().await;
        records
            .entry(telegram_id)
            .and_modify(|record| record.language = Some(language.code().to_string()))
            .or_insert_with(|| UserRecord::new(telegram_id, Some(language)));
        Ok(())
    }

    async fn grant_access(
        &self,
        telegram_id: i64,
        language: Language,
        duration_days: i64,
        method: JoinMethod,
    ) -> Result<UserRecord> {
        let record = UserRecord {
            telegram_id: telegram_id.to_string(),
            access_expires_at: Some(expiry_after(Utc::now().timestamp(), duration_days)),
            subscription_status: SubscriptionStatus::Active.as_str().to_string(),
            join_method: Some(method.as_str().to_string()),
            language: Some(language.code().to_string()),
        };

        self.records.write().await.insert(telegram_id, record.clone());
        Ok(record)
    }

    async fn list_expired(&self, as_of: i64) -> Result<Vec<i64>> {
        let records = self.records.read().await;
        let mut expired: Vec<(i64, i64)> = records
            .iter()
            .filter(|(_, record)| record.is_expired(as_of))
            .filter_map(|(id, record)| record.access_expires_at.map(|expires_at| (expires_at, *id)))
            .collect();
        expired.sort_unstable();

        Ok(expired.into_iter().map(|(_, id)| id).collect())
    }

    async fn find(&self, telegram_id: i64) -> Result<Option<UserRecord>> {
        Ok(self.records.read().await.get(&telegram_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SECONDS_PER_DAY;

    #[tokio::test]
    async fn test_set_then_get_language() {
        let store = MemoryUserStore::new(Language::En);
        for lang in Language::ALL {
            store.set_language(7, lang).await.unwrap();
            assert_eq!(store.get_language(7).await.unwrap(), lang);
        }
    }

    #[tokio::test]
    async fn test_missing_user_gets_default_language() {
        let store = MemoryUserStore::new(Language::Es);
        assert_eq!(store.get_language(404).await.unwrap(), Language::Es);

        store.insert(405, UserRecord { language: Some("fr".to_string()), ..UserRecord::new(405, None) }).await;
        assert_eq!(store.get_language(405).await.unwrap(), Language::Es);
    }

    #[tokio::test]
    async fn test_set_language_keeps_grant() {
        let store = MemoryUserStore::new(Language::En);
        let granted = store.grant_access(9, Language::En, 30, JoinMethod::DirectPass).await.unwrap();

        store.set_language(9, Language::Pt).await.unwrap();
        let record = store.find(9).await.unwrap().unwrap();

        assert_eq!(record.access_expires_at, granted.access_expires_at);
        assert_eq!(record.status(), SubscriptionStatus::Active);
        assert_eq!(record.grant_method(), Some(JoinMethod::DirectPass));
        assert_eq!(record.preferred_language(), Some(Language::Pt));
    }

    #[tokio::test]
    async fn test_grant_overwrites_previous_grant() {
        let store = MemoryUserStore::new(Language::En);
        store.grant_access(3, Language::En, 30, JoinMethod::DirectPass).await.unwrap();
        let second = store.grant_access(3, Language::Es, 15, JoinMethod::Subscription).await.unwrap();

        let now = Utc::now().timestamp();
        let expires_at = second.access_expires_at.unwrap();
        assert!((expires_at - (now + 15 * SECONDS_PER_DAY)).abs() <= 2);
        assert_eq!(second.grant_method(), Some(JoinMethod::Subscription));
        assert_eq!(store.find(3).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_list_expired_ignores_null_and_future() {
        let store = MemoryUserStore::new(Language::En);
        store.set_language(1, Language::En).await.unwrap();
        store.insert(2, UserRecord { access_expires_at: Some(99), ..UserRecord::new(2, None) }).await;
        store.insert(3, UserRecord { access_expires_at: Some(100), ..UserRecord::new(3, None) }).await;
        store.insert(4, UserRecord { access_expires_at: Some(50), ..UserRecord::new(4, None) }).await;

        assert_eq!(store.list_expired(100).await.unwrap(), vec![4, 2]);
    }

    #[tokio::test]
    async fn test_list_expired_agrees_with_record_expiry() {
        let store = MemoryUserStore::new(Language::En);
        for (id, expires_at) in [(1, None), (2, Some(99)), (3, Some(100)), (4, Some(101))] {
            store.insert(id, UserRecord { access_expires_at: expires_at, ..UserRecord::new(id, None) }).await;
        }

        let listed = store.list_expired(100).await.unwrap();
        for id in 1..=4 {
            let record = store.find(id).await.unwrap().unwrap();
            assert_eq!(listed.contains(&id), record.is_expired(100), "user {}", id);
        }
    }
}
