//! The chat exchange pipeline

use std::sync::Arc;

use tracing::debug;

use crate::config::ChatConfig;
use crate::error::{ChatError, Result};
use crate::http::{create_headers, HttpTransport, ReqwestTransport};
use crate::types::{ChatRequest, ChatResponse};

/// Client for one-shot chat completions
///
/// Each [`generate`](ChatClient::generate) call is an independent exchange:
/// serialize the prompt, POST it once, decode the text. There is no session
/// state, no caching, and no retry.
///
/// # Example
///
/// ```no_run
/// use cohere_chat::{ChatClient, ChatConfig};
///
/// // From the COHERE_API_KEY environment variable
/// let client = ChatClient::from_env();
///
/// // Or with an explicit key and endpoint
/// let config = ChatConfig::new("sk-...").with_base_url("http://localhost:8080");
/// ```
pub struct ChatClient {
    config: ChatConfig,
    transport: Arc<dyn HttpTransport>,
}

impl ChatClient {
    /// Create a client with the given configuration and transport
    pub fn new(config: ChatConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// Create a client with just an API key, using the default endpoint
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self::new(
            ChatConfig::new(api_key),
            Arc::new(ReqwestTransport::new()),
        )
    }

    /// Create a client from the `COHERE_API_KEY` environment variable
    ///
    /// An unset variable is not an error here; [`generate`](ChatClient::generate)
    /// fails with [`ChatError::CredentialMissing`] before touching the network.
    pub fn from_env() -> Self {
        Self::new(ChatConfig::default(), Arc::new(ReqwestTransport::new()))
    }

    /// Send `prompt` and return the generated text verbatim
    ///
    /// The prompt is not validated; an empty prompt is sent as-is. An empty
    /// `text` in the response is a valid result, not an error. Any failing
    /// stage aborts the exchange with the [`ChatError`] kind for that stage.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        if self.config.api_key.is_empty() {
            return Err(ChatError::CredentialMissing);
        }

        let request = ChatRequest::new(prompt);
        let body =
            serde_json::to_vec(&request).map_err(|source| ChatError::Encoding { source })?;

        let headers = create_headers(&self.config.api_key)?;
        let url = self.config.chat_url();
        debug!(%url, "sending chat request");

        let raw = self.transport.post(&url, headers, body).await?;

        let response: ChatResponse =
            serde_json::from_slice(&raw).map_err(|source| ChatError::Decoding { source })?;

        Ok(response.text)
    }
}
