use serde::{Deserialize, Serialize};

use crate::enums::Collection;
use crate::errors::CoreError;

/// A form-shaped record inserted once into a write-only collection.
pub trait Submission: Serialize {
    /// The collection the record is inserted into.
    const COLLECTION: Collection;

    /// Check that every required field is non-empty.
    ///
    /// This is the form layer's check; the submission gateway does not call it.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingField`] naming the first blank required field.
    fn validate(&self) -> Result<(), CoreError>;
}

fn require(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::MissingField { field });
    }
    Ok(())
}

/// A prospective client's project inquiry from the contact form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Inquiry {
    pub name: String,
    pub email: String,
    pub project_type: String,
    /// Optional; submitted as an empty string when not chosen.
    #[serde(default)]
    pub budget_range: String,
    pub message: String,
}

impl Submission for Inquiry {
    const COLLECTION: Collection = Collection::Inquiries;

    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("project_type", &self.project_type)?;
        require("message", &self.message)
    }
}

/// An application to join the team from the contribute form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContributionApplication {
    pub name: String,
    pub email: String,
    pub expertise: String,
    /// Optional; submitted as an empty string when not given.
    #[serde(default)]
    pub portfolio_url: String,
    pub message: String,
}

impl Submission for ContributionApplication {
    const COLLECTION: Collection = Collection::Contributions;

    fn validate(&self) -> Result<(), CoreError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("expertise", &self.expertise)?;
        require("message", &self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inquiry() -> Inquiry {
        Inquiry {
            name: "A".into(),
            email: "a@b.com".into(),
            project_type: "Other".into(),
            budget_range: String::new(),
            message: "hi".into(),
        }
    }

    #[test]
    fn inquiry_without_budget_is_valid() {
        assert!(inquiry().validate().is_ok());
    }

    #[test]
    fn blank_message_is_rejected() {
        let mut record = inquiry();
        record.message = "   ".into();
        let err = record.validate().unwrap_err();
        assert!(matches!(err, CoreError::MissingField { field: "message" }));
    }

    #[test]
    fn inquiry_serializes_as_flat_string_map() {
        let value = serde_json::to_value(inquiry()).unwrap();
        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 5);
        assert!(map.values().all(serde_json::Value::is_string));
        assert_eq!(map["budget_range"], "");
    }

    #[test]
    fn application_requires_expertise() {
        let record = ContributionApplication {
            name: "B".into(),
            email: "b@c.com".into(),
            expertise: String::new(),
            portfolio_url: String::new(),
            message: "let me in".into(),
        };
        let err = record.validate().unwrap_err();
        assert!(matches!(err, CoreError::MissingField { field: "expertise" }));
        assert_eq!(ContributionApplication::COLLECTION, Collection::Contributions);
    }
}
