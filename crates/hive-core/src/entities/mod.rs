//! Entity structs for all site domain objects.
//!
//! Each readable entity maps to a table in the remote store and declares its
//! collection and default ordering through [`Entity`]. Write-only records
//! (inquiries, contribution applications) implement [`Submission`] instead.
//!
//! Decoding is lenient: text and list columns that come back `null` or are
//! omitted decode to their empty value, so one sparse row never fails a whole
//! collection load.

mod edge;
mod engineer;
mod project;
mod submission;

pub use edge::{EngineerProjectEdge, ProjectWithContribution};
pub use engineer::Engineer;
pub use project::Project;
pub use submission::{ContributionApplication, Inquiry, Submission};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::enums::{Collection, OrderBy};

/// A row-shaped record with a stable identity, persisted in the remote store.
pub trait Entity: DeserializeOwned {
    /// The collection rows of this type are read from.
    const COLLECTION: Collection;

    /// Ordering applied when the caller does not request one.
    fn default_order() -> OrderBy;

    /// The row's identity.
    fn id(&self) -> &str;
}

/// Decode `null` as the type's default value.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode `null` and `""` as `None`.
pub(crate) fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.filter(|s| !s.trim().is_empty()))
}
