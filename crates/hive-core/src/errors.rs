//! Cross-cutting error types for the hive crates.
//!
//! Remote-facing errors (`StoreError`, `SiteError`) live in their own crates.
//! This module only covers failures that pure core logic can raise.

use thiserror::Error;

/// Errors that can be raised by core types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A form-shaped record is missing a required field.
    #[error("Validation error: {field} is required")]
    MissingField { field: &'static str },

    /// A route path did not match any known page.
    #[error("Unknown route: {0}")]
    UnknownRoute(String),

    /// A collection name did not match any known table.
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),
}
