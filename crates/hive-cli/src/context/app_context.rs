use std::sync::Arc;

use anyhow::Context;
use hive_config::HiveConfig;
use hive_site::SiteService;
use hive_store::{PostgrestStore, RemoteStore};

/// Everything a backend-facing command needs.
pub struct AppContext {
    pub service: SiteService,
}

impl AppContext {
    /// Build the backend client from `config.supabase`.
    ///
    /// # Errors
    ///
    /// Fails if the Supabase section is incomplete or the HTTP client cannot
    /// be built.
    pub fn init(config: &HiveConfig) -> anyhow::Result<Self> {
        config
            .supabase
            .validate()
            .context("cannot connect to the site backend")?;

        let store = PostgrestStore::from_config(&config.supabase)
            .context("failed to build Supabase client")?;
        tracing::debug!(rest_url = %config.supabase.rest_url(), "supabase client ready");

        Ok(Self::with_store(Arc::new(store)))
    }

    /// Use an already-built store, e.g. an in-memory one in tests.
    #[must_use]
    pub fn with_store(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            service: SiteService::new(store),
        }
    }
}

#[cfg(test)]
mod tests {
    use hive_config::{HiveConfig, SupabaseConfig};

    use super::AppContext;

    #[test]
    fn unconfigured_supabase_is_rejected() {
        let err = AppContext::init(&HiveConfig::default())
            .err()
            .expect("init should fail");
        assert!(format!("{err:#}").contains("HIVE_SUPABASE__URL"));
    }

    #[test]
    fn configured_supabase_builds_client() {
        let config = HiveConfig {
            supabase: SupabaseConfig {
                url: "https://demo.supabase.co".to_string(),
                anon_key: "anon".to_string(),
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(AppContext::init(&config).is_ok());
    }
}
