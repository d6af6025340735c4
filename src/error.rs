//! Error types for the Postmark administrative client.

use reqwest::StatusCode;
use thiserror::Error;

/// Error type for all administrative client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport failure: connection, timeout, TLS, or client construction.
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    /// A successful response body did not match the expected shape.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The service rejected the call with its own error code and message.
    #[error("postmark error {code} (http {status}): {message}")]
    Api {
        status: StatusCode,
        code: i64,
        message: String,
    },
    /// Non-success status whose body was not a Postmark error payload.
    #[error("unexpected status {status}: {body}")]
    Status { status: StatusCode, body: String },
    /// Invalid client configuration, e.g. a missing token or a token that
    /// cannot be used as a header value.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Postmark error code for [`Error::Api`] failures.
    pub fn error_code(&self) -> Option<i64> {
        match self {
            Error::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// HTTP status for failures that carry one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } | Error::Status { status, .. } => Some(*status),
            Error::Request(e) => e.status(),
            _ => None,
        }
    }
}
