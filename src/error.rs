//! Error types for the chat client

use thiserror::Error;

/// The error type for a chat exchange
///
/// Each variant classifies the stage of the pipeline that failed; the first
/// failing stage aborts the exchange and is returned to the caller unchanged.
/// No variant is recoverable by this crate — callers decide whether to log,
/// retry, or abort.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChatError {
    /// No API credential was available at the time of the call
    #[error("missing API credential (set COHERE_API_KEY)")]
    CredentialMissing,

    /// The request payload could not be serialized
    #[error("failed to encode request body: {source}")]
    Encoding {
        /// Underlying serialization error
        #[source]
        source: serde_json::Error,
    },

    /// The exchange never produced an HTTP response (DNS, connect, TLS)
    #[error("transport failure: {source}")]
    Transport {
        /// Underlying network error
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-OK status code
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    /// The response body could not be read to completion
    #[error("failed to read response body: {source}")]
    BodyRead {
        /// Underlying network error
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not decode as a chat response
    #[error("failed to decode response body: {source}")]
    Decoding {
        /// Underlying deserialization error
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for chat operations
pub type Result<T> = std::result::Result<T, ChatError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as StdError;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<String>("not-json").unwrap_err()
    }

    #[test]
    fn test_error_display() {
        let error = ChatError::CredentialMissing;
        assert_eq!(
            error.to_string(),
            "missing API credential (set COHERE_API_KEY)"
        );

        let error = ChatError::UnexpectedStatus(401);
        assert_eq!(error.to_string(), "unexpected status code 401");

        let error = ChatError::Decoding {
            source: json_error(),
        };
        assert!(error.to_string().starts_with("failed to decode response body"));
    }

    #[test]
    fn test_error_source() {
        let error = ChatError::CredentialMissing;
        assert!(error.source().is_none());

        let error = ChatError::UnexpectedStatus(500);
        assert!(error.source().is_none());

        let error = ChatError::Encoding {
            source: json_error(),
        };
        assert!(error.source().is_some());

        let error = ChatError::Decoding {
            source: json_error(),
        };
        assert!(error.source().is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<ChatError>();
        assert_sync::<ChatError>();
    }
}
