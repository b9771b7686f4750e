//! Client configuration

use crate::constants::{CHAT_PATH, COHERE_API_KEY_VAR, COHERE_DEFAULT_BASE_URL};

/// Configuration for [`ChatClient`](crate::ChatClient)
///
/// The credential is held explicitly here rather than read from the
/// environment inside the exchange logic, so tests can substitute a fake
/// key. The base URL defaults to the production endpoint and can be pointed
/// at a local stub server.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Bearer token authorizing calls to the service
    pub api_key: String,
    /// Base URL of the service; the chat path is appended per request
    pub base_url: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            api_key: std::env::var(COHERE_API_KEY_VAR).unwrap_or_default(),
            base_url: COHERE_DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl ChatConfig {
    /// Create a configuration with the given API key and the default endpoint
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: COHERE_DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Set the base URL
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Full URL of the chat endpoint
    pub fn chat_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CHAT_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_endpoint() {
        let config = ChatConfig::new("sk-test");
        assert_eq!(config.chat_url(), "https://api.cohere.com/v1/chat");
    }

    #[test]
    fn test_trailing_slash_is_normalized() {
        let config = ChatConfig::new("sk-test").with_base_url("http://localhost:8080/");
        assert_eq!(config.chat_url(), "http://localhost:8080/v1/chat");
    }
}
