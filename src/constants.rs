//! Constants for the Cohere chat client

/// Default Cohere API base URL
pub const COHERE_DEFAULT_BASE_URL: &str = "https://api.cohere.com";

/// Path of the chat endpoint, appended to the base URL
pub const CHAT_PATH: &str = "/v1/chat";

/// Environment variable holding the API credential
pub const COHERE_API_KEY_VAR: &str = "COHERE_API_KEY";
