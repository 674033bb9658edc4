//! Collection names and ordering for the remote store.
//!
//! All enums use `snake_case` serialization so their string form matches the
//! table and column names the hosted backend exposes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// A named table in the remote store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    Engineers,
    Projects,
    EngineerProjects,
    Inquiries,
    Contributions,
}

impl Collection {
    /// Every known collection, in declaration order.
    pub const ALL: [Self; 5] = [
        Self::Engineers,
        Self::Projects,
        Self::EngineerProjects,
        Self::Inquiries,
        Self::Contributions,
    ];

    /// Return the table name used by the remote store.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Engineers => "engineers",
            Self::Projects => "projects",
            Self::EngineerProjects => "engineer_projects",
            Self::Inquiries => "inquiries",
            Self::Contributions => "contributions",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| CoreError::UnknownCollection(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// SortDirection / OrderBy
// ---------------------------------------------------------------------------

/// Sort direction for an ordered read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// The short form used in query strings (`asc` / `desc`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Column the creation timestamp lives in on every readable table.
pub const CREATED_AT: &str = "created_at";

/// An ordering key for a collection read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: String,
    pub direction: SortDirection,
}

impl OrderBy {
    #[must_use]
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Ascending,
        }
    }

    #[must_use]
    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Descending,
        }
    }

    /// Oldest rows first.
    #[must_use]
    pub fn oldest_first() -> Self {
        Self::ascending(CREATED_AT)
    }

    /// Newest rows first.
    #[must_use]
    pub fn newest_first() -> Self {
        Self::descending(CREATED_AT)
    }
}
