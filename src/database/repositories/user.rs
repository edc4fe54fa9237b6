//! User repository implementation

use async_trait::async_trait;
use sqlx::PgPool;
use chrono::Utc;
use tracing::{debug, warn};
use crate::database::store::UserStore;
use crate::i18n::Language;
use crate::models::user::{expiry_after, JoinMethod, SubscriptionStatus, UserRecord};
use crate::utils::errors::StarPassError;

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    pool: PgPool,
    default_language: Language,
}

impl UserRepository {
    pub fn new(pool: PgPool, default_language: Language) -> Self {
        Self { pool, default_language }
    }

    /// Count stored users
    pub async fn count(&self) -> Result<i64, StarPassError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn get_language(&self, telegram_id: i64) -> Result<Language, StarPassError> {
        let row: Option<(Option<String>,)> = sqlx::query_as(
            "SELECT language FROM users WHERE telegram_id = $1"
        )
        .bind(telegram_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        let code = row.and_then(|(language,)| language);
        Ok(Language::resolve(code.as_deref(), self.default_language))
    }

    async fn set_language(&self, telegram_id: i64, language: Language) -> Result<(), StarPassError> {
        sqlx::query(
            r#"
            INSERT INTO users (telegram_id, access_expires_at, subscription_status, join_method, language)
            VALUES ($1, NULL, $2, NULL, $3)
            ON CONFLICT (telegram_id) DO UPDATE SET language = EXCLUDED.language
            "#
        )
        .bind(telegram_id.to_string())
        .bind(SubscriptionStatus::None.as_str())
        .bind(language.code())
        .execute(&self.pool)
        .await?;

        debug!(telegram_id = telegram_id, language = %language, "Stored language preference");
        Ok(())
    }

    async fn grant_access(
        &self,
        telegram_id: i64,
        language: Language,
        duration_days: i64,
        method: JoinMethod,
    ) -> Result<UserRecord, StarPassError> {
        let expires_at = expiry_after(Utc::now().timestamp(), duration_days);

        let record = sqlx::query_as::<_, UserRecord>(
            r#"
            INSERT INTO users (telegram_id, access_expires_at, subscription_status, join_method, language)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (telegram_id) DO UPDATE SET
                access_expires_at = EXCLUDED.access_expires_at,
                subscription_status = EXCLUDED.subscription_status,
                join_method = EXCLUDED.join_method,
                language = EXCLUDED.language
            RETURNING telegram_id, access_expires_at, subscription_status, join_method, language
            "#
        )
        .bind(telegram_id.to_string())
        .bind(expires_at)
        .bind(SubscriptionStatus::Active.as_str())
        .bind(method.as_str())
        .bind(language.code())
        .fetch_one(&self.pool)
        .await?;

        Ok(record)
    }

    async fn list_expired(&self, as_of: i64) -> Result<Vec<i64>, StarPassError> {
        let rows: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT telegram_id FROM users
            WHERE access_expires_at IS NOT NULL AND access_expires_at < $1
            ORDER BY access_expires_at
            "#
        )
        .bind(as_of)
        .fetch_all(&self.pool)
        .await?;

        let ids = rows
            .into_iter()
            .filter_map(|(telegram_id,)| match telegram_id.parse::<i64>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(telegram_id = %telegram_id, "Skipping expired row with non-numeric telegram_id");
                    None
                }
            })
            .collect();

        Ok(ids)
    }

    async fn find(&self, telegram_id: i64) -> Result<Option<UserRecord>, StarPassError> {
        let record = sqlx::query_as::<_, UserRecord>(
            "SELECT telegram_id, access_expires_at, subscription_status, join_method, language FROM users WHERE telegram_id = $1"
        )
        .bind(telegram_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }
}
