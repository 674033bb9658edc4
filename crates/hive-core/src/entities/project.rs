use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, empty_as_none, null_as_default};
use crate::enums::{Collection, OrderBy};

/// A portfolio case study.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub problem: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub solution: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub outcome: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub image_url: String,
    /// Free-text category used by the portfolio filter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Whether any of the problem/solution/outcome narrative is present.
    #[must_use]
    pub const fn has_narrative(&self) -> bool {
        self.problem.is_some() || self.solution.is_some() || self.outcome.is_some()
    }
}

impl Entity for Project {
    const COLLECTION: Collection = Collection::Projects;

    fn default_order() -> OrderBy {
        OrderBy::newest_first()
    }

    fn id(&self) -> &str {
        &self.id
    }
}
