//! # hive-config
//!
//! Layered configuration loading for the TechHive site using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`HIVE_*` prefix, `__` as separator)
//! 2. Project-level `.hive/config.toml`
//! 3. User-level `~/.config/hive/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `HIVE_SUPABASE__URL` -> `supabase.url`,
//! `HIVE_GENERAL__DEFAULT_FORMAT` -> `general.default_format`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use hive_config::HiveConfig;
//!
//! let config = HiveConfig::load_with_dotenv().expect("config");
//!
//! if config.supabase.is_configured() {
//!     println!("REST endpoint: {}", config.supabase.rest_url());
//! }
//! ```

mod error;
mod general;
mod supabase;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use supabase::SupabaseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix for every config key.
pub const ENV_PREFIX: &str = "HIVE_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HiveConfig {
    #[serde(default)]
    pub supabase: SupabaseConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl HiveConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed or a value
    /// has the wrong type.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Loads `.env` from the current directory (or the nearest ancestor) before
    /// building the figment. This is the typical entry point for the CLI.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Load configuration with an explicit project-level TOML file in place of
    /// `.hive/config.toml`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from(project_config: &Path) -> Result<Self, ConfigError> {
        Self::figment_with_project(project_config)
            .extract()
            .map_err(ConfigError::from)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_with_project(Path::new(".hive/config.toml"))
    }

    fn figment_with_project(project_config: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        if project_config.exists() {
            figment = figment.merge(Toml::file(project_config));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("hive").join("config.toml"))
    }
}
