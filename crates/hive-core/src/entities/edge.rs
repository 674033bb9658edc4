use serde::{Deserialize, Serialize};

use super::{Project, null_as_default};

/// A row of the `engineer_projects` join table, as read with its related
/// project embedded.
///
/// `project` is `None` when the embedded row is absent (a dangling edge).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineerProjectEdge {
    #[serde(default, deserialize_with = "null_as_default")]
    pub engineer_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub project_id: String,
    /// What this engineer did on this project.
    #[serde(default, deserialize_with = "null_as_default")]
    pub contribution: String,
    #[serde(default, rename = "projects")]
    pub project: Option<Project>,
}

/// A project as seen from one engineer's portfolio: every project field plus
/// the edge's `contribution`.
///
/// Serializes flat, so consumers see one object rather than a nested project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProjectWithContribution {
    #[serde(flatten)]
    pub project: Project,
    pub contribution: String,
}

impl ProjectWithContribution {
    /// Contribution text, or `None` when the edge carries none.
    #[must_use]
    pub fn contribution(&self) -> Option<&str> {
        Some(self.contribution.as_str()).filter(|c| !c.trim().is_empty())
    }
}
