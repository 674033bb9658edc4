//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed env var manipulation.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use hive_config::HiveConfig;

#[test]
fn loads_supabase_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[supabase]
url = "https://abcd.supabase.co"
anon_key = "anon-from-toml"
timeout_secs = 30
"#,
        )?;

        let config: HiveConfig = Figment::from(Serialized::defaults(HiveConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.supabase.url, "https://abcd.supabase.co");
        assert_eq!(config.supabase.anon_key, "anon-from-toml");
        assert_eq!(config.supabase.timeout_secs, 30);
        assert!(config.supabase.is_configured());
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_format = "json"
"#,
        )?;

        let config: HiveConfig = Figment::from(Serialized::defaults(HiveConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_format, "json");
        assert_eq!(config.general.skill_preview, 3);
        assert_eq!(config.supabase.timeout_secs, 10);
        assert!(!config.supabase.is_configured());
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[supabase]
url = "https://from-toml.supabase.co"
anon_key = "toml-key"
"#,
        )?;
        jail.set_env("HIVE_SUPABASE__ANON_KEY", "env-key");

        let config: HiveConfig = Figment::from(Serialized::defaults(HiveConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("HIVE_").split("__"))
            .extract()?;

        assert_eq!(config.supabase.url, "https://from-toml.supabase.co");
        assert_eq!(config.supabase.anon_key, "env-key");
        Ok(())
    });
}

#[test]
fn load_from_explicit_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir("site")?;
        jail.create_file(
            "site/config.toml",
            r#"
[supabase]
url = "https://site.supabase.co"
anon_key = "site-key"
"#,
        )?;

        let config = HiveConfig::load_from(std::path::Path::new("site/config.toml"))
            .expect("config loads");
        assert_eq!(config.supabase.rest_url(), "https://site.supabase.co/rest/v1");
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[supabase]
timeout_secs = "soon"
"#,
        )?;

        let result = HiveConfig::load_from(std::path::Path::new("config.toml"));
        assert!(matches!(result, Err(hive_config::ConfigError::Figment(_))));
        Ok(())
    });
}
