//! Transport/server error model.

use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure talking to the remote product service.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (connection refused, DNS, ...).
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status. `message` is the response body text, or a
    /// generic `HTTP <status>` when the body was empty.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// A response body failed to deserialize.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// Build the `Api` variant from a status code and (possibly empty) body.
    pub fn from_status(status: u16, body: &str) -> Self {
        let trimmed = body.trim();
        let message = if trimmed.is_empty() {
            format!("HTTP {status}")
        } else {
            trimmed.to_string()
        };
        Self::Api { status, message }
    }
}
