//! Fare API client error types.

use super::convert::ConversionError;

/// Errors from the fare API client.
#[derive(Debug, thiserror::Error)]
pub enum RyanairError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Response body is not the expected JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Response parsed but a fare could not be mapped to a flight
    #[error("unexpected fare data: {0}")]
    Conversion(#[from] ConversionError),

    /// The requested operation has no implementation
    #[error("not implemented: {0}")]
    NotImplemented(&'static str),
}

impl RyanairError {
    /// Whether the request itself failed, as opposed to its payload.
    pub fn is_transport(&self) -> bool {
        matches!(self, RyanairError::Http(_) | RyanairError::Api { .. })
    }
}
