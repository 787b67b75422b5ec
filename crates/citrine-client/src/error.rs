//! Error types for the citrine client.

use reqwest::header::InvalidHeaderValue;
use thiserror::Error;

/// Failures moving bytes to and from the search service.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Build(#[source] reqwest::Error),

    /// The API key cannot be sent as a header.
    #[error("API key is not a valid header value: {0}")]
    InvalidApiKey(#[from] InvalidHeaderValue),

    /// The request did not complete.
    #[error("request to {url} failed: {source}")]
    Request {
        /// Requested URL.
        url: String,
        /// Underlying HTTP error.
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{url} returned HTTP {status}: {body}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
        /// Response body, possibly empty.
        body: String,
    },
}

/// Errors returned by [`SearchClient`](crate::SearchClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be delivered or was refused.
    #[error("search request to {endpoint} failed: {source}")]
    Transport {
        /// Endpoint path.
        endpoint: &'static str,
        /// Underlying transport error.
        source: TransportError,
    },

    /// The query could not be serialized.
    #[error("failed to encode query: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response was not a valid result document.
    #[error("failed to decode response from {endpoint}: {source}")]
    Decode {
        /// Endpoint path.
        endpoint: &'static str,
        /// Underlying JSON error.
        source: serde_json::Error,
    },
}
