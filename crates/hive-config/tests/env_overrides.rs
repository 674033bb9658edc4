use figment::Jail;
use hive_config::HiveConfig;

#[test]
fn env_vars_fill_config_values() {
    Jail::expect_with(|jail| {
        jail.set_env("HIVE_SUPABASE__URL", "https://env.supabase.co");
        jail.set_env("HIVE_SUPABASE__ANON_KEY", "anon-from-env");
        jail.set_env("HIVE_SUPABASE__TIMEOUT_SECS", "5");

        let config = HiveConfig::load().expect("config loads");
        assert_eq!(config.supabase.url, "https://env.supabase.co");
        assert_eq!(config.supabase.anon_key, "anon-from-env");
        assert_eq!(config.supabase.timeout_secs, 5);
        assert!(config.supabase.validate().is_ok());
        Ok(())
    });
}

#[test]
fn single_underscore_does_not_nest() {
    Jail::expect_with(|jail| {
        jail.set_env("HIVE_SUPABASE_URL", "https://ignored.supabase.co");

        let config = HiveConfig::load().expect("config loads");
        assert!(config.supabase.url.is_empty());
        Ok(())
    });
}
