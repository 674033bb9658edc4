//! # hive-store
//!
//! Remote data client for the site's hosted relational backend.
//!
//! The site never owns its data: engineers, projects, the
//! `engineer_projects` join table, and the two form inboxes all live in a
//! hosted Supabase project. This crate defines the port the rest of the
//! workspace talks to ([`RemoteStore`]) and two adapters:
//! - [`PostgrestStore`]: HTTP client for the PostgREST API
//! - [`MemoryStore`]: in-memory fake with failure injection, for tests
//!
//! The handle is constructed explicitly and passed in; nothing here is global.

pub mod error;
mod http;
pub mod memory;
pub mod postgrest;
pub mod query;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use postgrest::PostgrestStore;
pub use query::{Embed, Equals, Select};

use async_trait::async_trait;
use hive_core::enums::Collection;

/// One row as the backend returns it: column name → JSON value.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Query interface of the hosted backend.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Read the rows matching `query`.
    ///
    /// `Ok(None)` means the backend answered without a result set; callers
    /// decide how to normalise it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on transport, status, or decode failure.
    async fn select(&self, query: &Select) -> Result<Option<Vec<Row>>, StoreError>;

    /// Insert exactly one row into `collection`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend does not accept the row.
    async fn insert(&self, collection: Collection, row: Row) -> Result<(), StoreError>;
}
