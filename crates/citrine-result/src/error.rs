//! Error types for the citrine-result crate.

use thiserror::Error;

use crate::multi::Status;

/// Errors raised when reading results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResultError {
    /// A hit index past the end of the hit list.
    #[error("hit index {index} out of range for {len} hits")]
    HitOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of hits available.
        len: usize,
    },

    /// A sub-query that did not succeed.
    #[error("sub-query {status}: {}", .message.as_deref().unwrap_or("no detail"))]
    Failed {
        /// Reported status.
        status: Status,
        /// Error detail from the engine, if any.
        message: Option<String>,
    },

    /// A successful sub-query that carried no result.
    #[error("sub-query succeeded without a result")]
    MissingResult,
}
