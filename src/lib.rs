//! # Postmark Admin Client
//! Asynchronous wrapper around the Postmark administrative HTTP API: manage the servers and sender signatures of one account from Rust using [`AdminClient`] and [`AdminClientBuilder`].
//!
//! ## Audience and uses
//! For applications that provision Postmark servers or sender signatures programmatically. Each method maps to exactly one remote endpoint and returns a typed record ([`Server`], [`CompleteSenderSignature`], ...) or a typed [`Error`].
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Logging goes through the `log` facade; install any logger to see request traces.
//!
//! ## Out of scope
//! Sending mail with per-server tokens, webhooks, retries and input validation. Postmark itself decides what is valid.
//!
//! ## Errors
//! Transport failures and timeouts surface as [`Error::Request`]. Non-2xx responses carrying a Postmark error body become [`Error::Api`] with the service's `ErrorCode` and `Message`; other non-2xx responses become [`Error::Status`]. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Example
//! ```no_run
//! use postmark_admin_client::{AdminClient, CreateSignatureOptions, ListServersOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), postmark_admin_client::Error> {
//!     let client = AdminClient::new("ACCOUNT-TOKEN")?;
//!
//!     let servers = client.list_servers(&ListServersOptions::default()).await?;
//!     for server in servers.servers {
//!         println!("{}: {}", server.id, server.name);
//!     }
//!
//!     let signature = client
//!         .create_sender_signature(&CreateSignatureOptions::new("a@b.com", "A"))
//!         .await?;
//!     println!("Confirmed: {}", signature.confirmed);
//!     Ok(())
//! }
//! ```

mod base;
mod client;
mod endpoint;
mod error;
mod models;
mod options;

pub use client::{
    ACCOUNT_TOKEN_HEADER, AdminClient, AdminClientBuilder, BASE_URL_ENV_VAR, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS, TOKEN_ENV_VAR,
};
pub use error::Error;
pub use models::{
    CompleteSenderSignature, PostmarkResponse, PostmarkStatus, SenderSignature,
    SenderSignatureList, Server, ServerList,
};
pub use options::{
    CreateServerOptions, CreateSignatureOptions, DEFAULT_COUNT, DEFAULT_OFFSET,
    EditServerOptions, ListServersOptions, PageOptions, ServerSettings, UpdateSignatureOptions,
};

/// Result type alias for administrative operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
