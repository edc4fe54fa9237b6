//! User model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use crate::i18n::Language;

/// Seconds in one day of granted access
pub const SECONDS_PER_DAY: i64 = 24 * 60 * 60;

/// One row of the `users` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub telegram_id: String,
    /// Unix seconds; `None` until a grant is issued
    pub access_expires_at: Option<i64>,
    pub subscription_status: String,
    pub join_method: Option<String>,
    pub language: Option<String>,
}

/// Stored access state; expiry is derived from `access_expires_at`, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    None,
    Active,
}

impl SubscriptionStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            SubscriptionStatus::None => "none",
            SubscriptionStatus::Active => "active",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "active" => SubscriptionStatus::Active,
            _ => SubscriptionStatus::None,
        }
    }
}

/// How the current grant was obtained
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JoinMethod {
    DirectPass,
    Subscription,
}

impl JoinMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinMethod::DirectPass => "direct_pass",
            JoinMethod::Subscription => "subscription",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "direct_pass" => Some(JoinMethod::DirectPass),
            "subscription" => Some(JoinMethod::Subscription),
            _ => None,
        }
    }
}

impl UserRecord {
    /// Record created on first interaction, before any grant
    pub fn new(telegram_id: i64, language: Option<Language>) -> Self {
        Self {
            telegram_id: telegram_id.to_string(),
            access_expires_at: None,
            subscription_status: SubscriptionStatus::None.as_str().to_string(),
            join_method: None,
            language: language.map(|l| l.code().to_string()),
        }
    }

    pub fn status(&self) -> SubscriptionStatus {
        SubscriptionStatus::parse(&self.subscription_status)
    }

    pub fn grant_method(&self) -> Option<JoinMethod> {
        self.join_method.as_deref().and_then(JoinMethod::parse)
    }

    pub fn preferred_language(&self) -> Option<Language> {
        self.language.as_deref().and_then(Language::from_code)
    }

    /// Whether a grant was issued and lapsed strictly before `now`
    pub fn is_expired(&self, now: i64) -> bool {
        matches!(self.access_expires_at, Some(expires_at) if expires_at < now)
    }
}

/// Expiry timestamp for a grant of `duration_days` issued at `now`
pub fn expiry_after(now: i64, duration_days: i64) -> i64 {
    now + duration_days * SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_has_no_grant() {
        let record = UserRecord::new(42, Some(Language::Es));
        assert_eq!(record.telegram_id, "42");
        assert_eq!(record.access_expires_at, None);
        assert_eq!(record.status(), SubscriptionStatus::None);
        assert_eq!(record.grant_method(), None);
        assert_eq!(record.preferred_language(), Some(Language::Es));
    }

    #[test]
    fn test_expiry_is_strict() {
        let mut record = UserRecord::new(1, None);
        assert!(!record.is_expired(1_000));

        record.access_expires_at = Some(1_000);
        assert!(!record.is_expired(1_000));
        assert!(record.is_expired(1_001));
    }

    #[test]
    fn test_expiry_after() {
        assert_eq!(expiry_after(0, 30), 2_592_000);
        assert_eq!(expiry_after(100, 15), 100 + 1_296_000);
    }

    #[test]
    fn test_unknown_stored_values_are_coerced() {
        assert_eq!(SubscriptionStatus::parse("expired"), SubscriptionStatus::None);
        assert_eq!(JoinMethod::parse("gift"), None);
    }
}
