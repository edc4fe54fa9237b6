//! Test helpers module
//!
//! This module provides utilities and helpers for testing the StarPass bot:
//! a mock Telegram Bot API, a migrated test database and a ready-to-use
//! handler context.

#![allow(dead_code)]

pub mod database_helper;
pub mod telegram_mock;

pub use database_helper::*;
pub use telegram_mock::*;

use std::sync::Arc;
use teloxide::{types::ChatId, Bot};
use StarPass::{
    database::MemoryUserStore,
    i18n::{Catalog, Language},
    services::ServiceFactory,
};

/// Handler test context backed by an in-memory store and a mock Bot API
pub struct TestContext {
    pub telegram_mock: TelegramMockServer,
    pub store: Arc<MemoryUserStore>,
    pub services: ServiceFactory,
}

impl TestContext {
    pub async fn new() -> Self {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let telegram_mock = TelegramMockServer::new().await;
        telegram_mock.setup_default_mocks().await;

        Self::with_mock(telegram_mock)
    }

    /// Context around a mock the caller already configured
    pub fn with_mock(telegram_mock: TelegramMockServer) -> Self {
        let store = Arc::new(MemoryUserStore::new(Language::En));
        let catalog = Catalog::load(Language::En).expect("embedded catalog loads");
        let services = ServiceFactory::new(store.clone(), catalog);

        Self {
            telegram_mock,
            store,
            services,
        }
    }

    pub fn bot(&self) -> Bot {
        self.telegram_mock.bot()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.services.catalog
    }

    pub fn chat(&self) -> ChatId {
        ChatId(test_user_id())
    }
}
