use hive_config::HiveConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &HiveConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &HiveConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();
    let mut warnings = Vec::new();

    if !config.supabase.is_configured() {
        // SUPABASE_URL / VITE_SUPABASE_URL style names are not read.
        if keys.iter().any(|key| key.ends_with("SUPABASE_URL") && !key.starts_with("HIVE_")) {
            warnings.push(
                "Found a *SUPABASE_URL env var, but hive reads HIVE_SUPABASE__URL and HIVE_SUPABASE__ANON_KEY."
                    .to_string(),
            );
        }
        if keys.iter().any(|key| key.starts_with("HIVE_SUPABASE_") && !key.starts_with("HIVE_SUPABASE__")) {
            warnings.push(
                "Supabase config appears default while HIVE_SUPABASE_* env vars exist. Use double underscores (example: HIVE_SUPABASE__URL)."
                    .to_string(),
            );
        }
    }

    warnings
}
