//! Error types for Gitee API requests.

use thiserror::Error;

/// Failure of a single request/response round trip.
///
/// Every client operation returns this type unchanged. Status codes are
/// reported raw; interpreting them is left to the caller.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The request could not be sent or the connection failed.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The remote answered with a non-success status.
    #[error("request to {url} failed with status {status}: {body}")]
    Status {
        /// Full request URL, without query parameters.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the remote.
        body: String,
    },

    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
}

impl RequestError {
    /// HTTP status code, when the remote produced one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            Self::Decode(_) => None,
        }
    }
}

/// Result type for Gitee API requests.
pub type Result<T> = std::result::Result<T, RequestError>;
