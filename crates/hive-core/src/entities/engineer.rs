use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Entity, empty_as_none, null_as_default};
use crate::enums::{Collection, OrderBy};

/// A team member shown in the engineer directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Engineer {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Free-text category used by the directory's role filter.
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub bio: String,
    /// Ordered skill labels; may be empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub photo_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub github_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub linkedin_url: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub portfolio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Engineer {
    /// First word of the engineer's name, used in "Projects that X has
    /// contributed to" headings.
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or_default()
    }

    /// Split skills into the first `shown` labels and the count of the rest.
    ///
    /// Directory cards show three skills and a `+N` badge for the remainder.
    #[must_use]
    pub fn skill_preview(&self, shown: usize) -> (&[String], usize) {
        let cut = shown.min(self.skills.len());
        (&self.skills[..cut], self.skills.len() - cut)
    }
}

impl Entity for Engineer {
    const COLLECTION: Collection = Collection::Engineers;

    fn default_order() -> OrderBy {
        OrderBy::oldest_first()
    }

    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_full_row() {
        let json = r#"{
            "id": "eng-1",
            "name": "Ada Lovelace",
            "role": "Backend",
            "bio": "Writes engines.",
            "skills": ["Rust", "Postgres"],
            "photo_url": "https://img/ada.jpg",
            "github_url": "https://github.com/ada",
            "linkedin_url": "https://linkedin.com/in/ada",
            "portfolio_url": "https://ada.dev",
            "created_at": "2025-01-15T10:30:00.123456+00:00"
        }"#;
        let eng: Engineer = serde_json::from_str(json).unwrap();
        assert_eq!(eng.role, "Backend");
        assert_eq!(eng.skills, vec!["Rust".to_string(), "Postgres".to_string()]);
        assert_eq!(eng.portfolio_url.as_deref(), Some("https://ada.dev"));
        assert!(eng.created_at.is_some());
    }

    #[test]
    fn sparse_row_decodes_to_empty_values() {
        let json = r#"{"id": "eng-2", "skills": null, "bio": null, "portfolio_url": ""}"#;
        let eng: Engineer = serde_json::from_str(json).unwrap();
        assert!(eng.skills.is_empty());
        assert!(eng.bio.is_empty());
        assert!(eng.portfolio_url.is_none());
        assert!(eng.created_at.is_none());
    }

    #[test]
    fn first_name_and_skill_preview() {
        let eng: Engineer = serde_json::from_str(
            r#"{"id": "e", "name": "Grace Brewster Hopper", "skills": ["a", "b", "c", "d", "e"]}"#,
        )
        .unwrap();
        assert_eq!(eng.first_name(), "Grace");
        let (shown, rest) = eng.skill_preview(3);
        assert_eq!(shown.len(), 3);
        assert_eq!(rest, 2);

        let (shown, rest) = eng.skill_preview(10);
        assert_eq!(shown.len(), 5);
        assert_eq!(rest, 0);
    }

    #[test]
    fn engineers_default_to_oldest_first() {
        assert_eq!(Engineer::default_order(), OrderBy::oldest_first());
        assert_eq!(Engineer::COLLECTION, Collection::Engineers);
    }
}
