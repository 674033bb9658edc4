//! Hosted backend (Supabase / PostgREST) configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SupabaseConfig {
    /// Project URL (e.g., `https://abcd.supabase.co`).
    #[serde(default)]
    pub url: String,

    /// Public anon key. Sent as both `apikey` and bearer token.
    #[serde(default)]
    pub anon_key: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SupabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            anon_key: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SupabaseConfig {
    /// Check if the minimum fields for remote access are set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.url.is_empty() && !self.anon_key.is_empty()
    }

    /// Base URL of the REST endpoint, without a trailing slash.
    #[must_use]
    pub fn rest_url(&self) -> String {
        format!("{}/rest/v1", self.url.trim_end_matches('/'))
    }

    /// Check the section is configured and its values are usable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] if `url` or `anon_key` is empty,
    /// or [`ConfigError::InvalidValue`] if the URL is not http(s) or the
    /// timeout is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.is_configured() {
            let missing = [
                (self.url.is_empty(), "HIVE_SUPABASE__URL"),
                (self.anon_key.is_empty(), "HIVE_SUPABASE__ANON_KEY"),
            ]
            .into_iter()
            .filter_map(|(absent, key)| absent.then_some(key))
            .collect();
            return Err(ConfigError::NotConfigured {
                section: "supabase".into(),
                missing,
            });
        }
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "supabase.url".into(),
                reason: format!("expected an http(s) URL, got '{}'", self.url),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "supabase.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }
}
