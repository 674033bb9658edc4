//! Pipeline error types for hive-site.

use hive_core::enums::Collection;
use hive_store::StoreError;
use thiserror::Error;

/// Errors from loading or submitting site data.
///
/// Every variant is converted to a view state at the view boundary; none is
/// meant to reach a top-level crash handler.
#[derive(Debug, Error)]
pub enum SiteError {
    /// A read failed in transport, status, or decoding.
    #[error("Failed to fetch {collection}: {source}")]
    RemoteFetch {
        collection: Collection,
        #[source]
        source: StoreError,
    },

    /// A well-formed by-identity read matched zero rows.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// A form submission insert was not accepted.
    #[error("Submission to {collection} failed: {source}")]
    SubmissionFailed {
        collection: Collection,
        #[source]
        source: StoreError,
    },
}

impl SiteError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
