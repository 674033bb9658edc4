//! Remote store error types.

use hive_core::enums::Collection;
use thiserror::Error;

/// Errors that can occur when talking to the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a non-success status code.
    #[error("API error on {collection} ({status}): {message}")]
    Api {
        /// Collection the request targeted.
        collection: Collection,
        /// HTTP status code returned by the backend.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The backend returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// A row could not be decoded into the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The store refused the request without a transport failure.
    #[error("{collection} rejected the request: {message}")]
    Rejected {
        collection: Collection,
        message: String,
    },
}
