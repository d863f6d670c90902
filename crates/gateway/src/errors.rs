//! Error types for gateway operations.

use thiserror::Error;

/// Errors that can occur while talking to the backend.
///
/// Every operation is single-attempt: the gateway never retries, so each
/// variant describes exactly one failed request. Retry policy, if any, is
/// the caller's decision.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The request could not be composed: bad base URL, unparseable path,
    /// or an empty required parameter. Raised before any network I/O.
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request was sent but transport failed (DNS, connect, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The backend answered with a non-200 status. The backend treats
    /// anything but 200 as failure, so this maps every other status.
    #[error("Bad server response: HTTP {status}")]
    BadStatus {
        /// The HTTP status code that was returned
        status: u16,
    },

    /// The body arrived but did not decode into the expected shape.
    #[error("Failed to decode response body: {0}")]
    Decode(String),
}

impl GatewayError {
    /// Returns true for the "bad server response" class: the backend was
    /// reached but returned something unusable (non-200 status or an
    /// undecodable body).
    pub fn is_bad_response(&self) -> bool {
        matches!(self, Self::BadStatus { .. } | Self::Decode(_))
    }
}
