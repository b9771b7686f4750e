//! One-shot chat completion client for the Cohere `/v1/chat` API
//!
//! The crate exposes a single [`ChatClient`] that performs one
//! request/response exchange per call: serialize the prompt, POST it with
//! bearer authentication, decode the generated text. Every failing stage
//! maps to one [`ChatError`] kind and aborts the exchange; there are no
//! retries and no partial results.
//!
//! # Example
//!
//! ```no_run
//! use cohere_chat::ChatClient;
//!
//! # async fn run() -> cohere_chat::Result<()> {
//! let client = ChatClient::from_env();
//! let text = client.generate("Say hello").await?;
//! println!("{text}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod http;
pub mod types;

pub use client::ChatClient;
pub use config::ChatConfig;
pub use error::{ChatError, Result};
