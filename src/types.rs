//! Wire types for the chat endpoint

use serde::{Deserialize, Serialize};

/// Outbound payload: exactly one `message` key holding the prompt
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// The prompt text, sent verbatim
    pub message: String,
}

impl ChatRequest {
    /// Create a request from a prompt
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            message: prompt.into(),
        }
    }
}

/// Inbound payload
///
/// Only `text` is decoded; anything else the service returns is ignored. A
/// missing `text` field decodes to the empty string, which is a valid
/// response, not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    /// The generated text
    #[serde(default)]
    pub text: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_request_payload_shape() {
        let request = ChatRequest::new("hello world");
        let payload = serde_json::to_string(&request).unwrap();
        assert_eq!(payload, r#"{"message":"hello world"}"#);
    }

    #[test]
    fn test_request_round_trip() {
        #[derive(Deserialize)]
        struct Echo {
            message: String,
        }

        let payload = serde_json::to_vec(&ChatRequest::new("reckon")).unwrap();
        let echo: Echo = serde_json::from_slice(&payload).unwrap();
        assert_eq!(echo.message, "reckon");
    }

    #[test]
    fn test_response_extra_fields_ignored() {
        let response: ChatResponse =
            serde_json::from_str(r#"{"text":"hi","generation_id":"abc","meta":{}}"#).unwrap();
        assert_eq!(response.text, "hi");
    }

    #[test]
    fn test_response_missing_text_defaults_to_empty() {
        let response: ChatResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.text, "");
    }
}
