//! Blocking client for the Citrination search API.
//!
//! [`SearchClient`] encodes queries from `citrine-query`, sends them over a
//! [`Transport`] and decodes the answers into `citrine-result` types.
//! [`HttpTransport`] is the production transport; tests substitute their own.

#![warn(missing_docs)]

mod client;
mod error;
mod transport;

pub use client::{
    DATASET_SEARCH_PATH, FILE_SEARCH_PATH, PIF_MULTI_SEARCH_PATH, PIF_SEARCH_PATH, SearchClient,
};
pub use error::{ClientError, TransportError};
pub use transport::{HttpTransport, Transport};
