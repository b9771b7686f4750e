//! HTTP transport abstraction and utilities

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::StatusCode;

use crate::error::{ChatError, Result};

/// HTTP transport abstraction
///
/// The exchange logic depends on this trait rather than on reqwest directly,
/// so tests can substitute a stub that records or refuses invocations.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// POST `body` to `url` with `headers` and return the response body bytes
    ///
    /// Implementations classify failures as [`ChatError::Transport`] when no
    /// response was received, [`ChatError::UnexpectedStatus`] for any non-OK
    /// status (the body is discarded), and [`ChatError::BodyRead`] when the
    /// body could not be collected.
    async fn post(&self, url: &str, headers: HeaderMap, body: Vec<u8>) -> Result<Bytes>;
}

/// Default transport implementation using reqwest
///
/// No timeout is configured beyond reqwest's defaults, and no retry is
/// attempted. The inner client holds a connection pool and is safe for
/// concurrent reuse.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    /// Create a transport with reqwest's default configuration
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn post(&self, url: &str, headers: HeaderMap, body: Vec<u8>) -> Result<Bytes> {
        let response = self
            .client
            .post(url)
            .headers(headers)
            .body(body)
            .send()
            .await
            .map_err(|source| ChatError::Transport { source })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(ChatError::UnexpectedStatus(status.as_u16()));
        }

        response
            .bytes()
            .await
            .map_err(|source| ChatError::BodyRead { source })
    }
}

/// Build the headers for a chat request: JSON content type plus bearer auth
///
/// A key that cannot be encoded as a header value is unusable as a
/// credential and reports [`ChatError::CredentialMissing`].
pub fn create_headers(api_key: &str) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();

    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| ChatError::CredentialMissing)?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    Ok(headers)
}
