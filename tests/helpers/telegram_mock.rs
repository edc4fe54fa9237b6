//! Mock Telegram API Server for testing
//!
//! This module provides a mock HTTP server that simulates the Telegram Bot API
//! for testing purposes. It uses wiremock to create configurable mock responses
//! and exposes the requests the bot actually sent.

use serde_json::{json, Value};
use teloxide::Bot;
use wiremock::{
    matchers::{body_partial_json, method, path_regex},
    Mock, MockServer, ResponseTemplate,
};

/// Mock Telegram API server for testing
pub struct TelegramMockServer {
    pub server: MockServer,
}

/// Configuration for mock responses
#[derive(Debug, Clone)]
pub struct MockResponseConfig {
    pub success: bool,
    pub delay_ms: Option<u64>,
}

impl Default for MockResponseConfig {
    fn default() -> Self {
        Self {
            success: true,
            delay_ms: None,
        }
    }
}

/// Case-insensitive path matcher for one Bot API method
fn api_method(name: &str) -> wiremock::matchers::PathRegexMatcher {
    path_regex(format!("(?i)^/bot[^/]+/{}$", name))
}

fn error_body(description: &str) -> Value {
    json!({
        "ok": false,
        "error_code": 400,
        "description": description
    })
}

fn respond(config: &MockResponseConfig, success_body: Value, error_description: &str) -> ResponseTemplate {
    let mut response = if config.success {
        ResponseTemplate::new(200).set_body_json(success_body)
    } else {
        ResponseTemplate::new(400).set_body_json(error_body(error_description))
    };

    if let Some(delay) = config.delay_ms {
        response = response.set_delay(std::time::Duration::from_millis(delay));
    }

    response
}

impl TelegramMockServer {
    /// Create a new mock Telegram API server
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        Self { server }
    }

    /// Bot pointed at this server
    pub fn bot(&self) -> Bot {
        let url = url::Url::parse(&self.server.uri()).expect("mock server uri is a valid url");
        Bot::new(test_bot_token()).set_api_url(url)
    }

    /// Setup mock for sendMessage endpoint
    pub async fn mock_send_message(&self, config: MockResponseConfig) {
        let message = json!({
            "ok": true,
            "result": {
                "message_id": 123,
                "from": {
                    "id": 12345,
                    "is_bot": true,
                    "first_name": "TestBot",
                    "username": "test_bot"
                },
                "chat": {
                    "id": -1001234567890_i64,
                    "title": "Test Group",
                    "type": "supergroup"
                },
                "date": 1640995200,
                "text": "Test message"
            }
        });

        Mock::given(method("POST"))
            .and(api_method("sendMessage"))
            .respond_with(respond(&config, message, "Bad Request: chat not found"))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for answerCallbackQuery endpoint
    pub async fn mock_answer_callback_query(&self, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(api_method("answerCallbackQuery"))
            .respond_with(respond(&config, json!({ "ok": true, "result": true }), "Bad Request: query is too old"))
            .mount(&self.server)
            .await;
    }

    /// Setup mock for banChatMember endpoint
    pub async fn mock_ban_chat_member(&self, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(api_method("banChatMember"))
            .respond_with(respond(&config, json!({ "ok": true, "result": true }), "Bad Request: not enough rights"))
            .mount(&self.server)
            .await;
    }

    /// Make banChatMember fail for one user only
    pub async fn mock_ban_chat_member_failure_for(&self, user_id: i64) {
        Mock::given(method("POST"))
            .and(api_method("banChatMember"))
            .and(body_partial_json(json!({ "user_id": user_id })))
            .respond_with(ResponseTemplate::new(400).set_body_json(error_body("Bad Request: user not found")))
            .with_priority(1)
            .mount(&self.server)
            .await;
    }

    /// Setup mock for unbanChatMember endpoint
    pub async fn mock_unban_chat_member(&self, config: MockResponseConfig) {
        Mock::given(method("POST"))
            .and(api_method("unbanChatMember"))
            .respond_with(respond(&config, json!({ "ok": true, "result": true }), "Bad Request: not enough rights"))
            .mount(&self.server)
            .await;
    }

    /// Mount successful responses for every method the bot uses
    pub async fn setup_default_mocks(&self) {
        let config = MockResponseConfig::default();
        self.mock_send_message(config.clone()).await;
        self.mock_answer_callback_query(config.clone()).await;
        self.mock_ban_chat_member(config.clone()).await;
        self.mock_unban_chat_member(config).await;
    }

    /// JSON bodies of every request made to one Bot API method, in order
    pub async fn requests_to(&self, api_method_name: &str) -> Vec<Value> {
        let suffix = format!("/{}", api_method_name.to_ascii_lowercase());

        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .into_iter()
            .filter(|request| request.url.path().to_ascii_lowercase().ends_with(&suffix))
            .map(|request| request.body_json::<Value>().expect("bot sends json bodies"))
            .collect()
    }

    /// Lowercased Bot API method names of every request, in arrival order
    pub async fn called_methods(&self) -> Vec<String> {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter_map(|request| request.url.path().rsplit('/').next().map(str::to_ascii_lowercase))
            .collect()
    }

    /// Texts of every sendMessage request, in order
    pub async fn sent_texts(&self) -> Vec<String> {
        self.requests_to("sendMessage")
            .await
            .into_iter()
            .filter_map(|body| body["text"].as_str().map(str::to_string))
            .collect()
    }
}

pub fn test_bot_token() -> &'static str {
    "12345:test_token"
}

pub fn test_channel_id() -> i64 {
    -1001234567890
}

pub fn test_user_id() -> i64 {
    987654321
}
