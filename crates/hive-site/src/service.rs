//! Service handle shared by the loader, joiner, and gateway.
//!
//! Each of those modules adds methods to `SiteService` via `impl SiteService`
//! blocks.

use std::sync::Arc;

use hive_store::RemoteStore;

/// Entry point for every site data operation.
///
/// Cheap to clone; clones share the same store handle.
#[derive(Clone)]
pub struct SiteService {
    store: Arc<dyn RemoteStore>,
}

impl SiteService {
    #[must_use]
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self { store }
    }

    /// Access the underlying store handle.
    #[must_use]
    pub fn store(&self) -> &dyn RemoteStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for SiteService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteService").finish_non_exhaustive()
    }
}
