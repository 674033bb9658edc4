//! General application configuration.

use serde::{Deserialize, Serialize};

/// Number of skill labels shown on a directory card.
const fn default_skill_preview() -> usize {
    3
}

fn default_format() -> String {
    "table".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Output format used when `--format` is not given (`json`, `table`, `raw`).
    #[serde(default = "default_format")]
    pub default_format: String,

    /// Skill labels shown per engineer before collapsing into `+N`.
    #[serde(default = "default_skill_preview")]
    pub skill_preview: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
            skill_preview: default_skill_preview(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_format, "table");
        assert_eq!(config.skill_preview, 3);
    }
}
