//! Configuration error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Layer extraction or merge failed.
    #[error("Failed to load hive config: {0}")]
    Figment(#[from] figment::Error),

    /// A required section is missing values; `missing` names the env keys
    /// that would supply them.
    #[error("'{section}' is not configured: set {}", .missing.join(" and "))]
    NotConfigured {
        section: String,
        missing: Vec<&'static str>,
    },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}
