//! Configuration loader

use config::{Config, Environment, File};
use std::path::Path;
use tracing::debug;

use super::types::{AppConfig, CommunityConfig};
use crate::common::errors::{CommunityError, Result};

/// Load configuration from file and environment variables
///
/// Priority (highest to lowest):
/// 1. Environment variables (prefixed with APP_, `__` between sections)
/// 2. Configuration file (TOML format)
/// 3. Default values
pub fn load_config(config_path: Option<&str>) -> Result<AppConfig> {
    let mut builder = Config::builder();

    if let Some(path) = config_path {
        if Path::new(path).exists() {
            debug!(path, "Adding configuration file source");
            builder = builder.add_source(File::with_name(path).required(false));
        }
    }

    // e.g. APP__COMMUNITY__COMMUNITY_URL, APP__SETTINGS__LOG_LEVEL
    builder = builder.add_source(
        Environment::with_prefix("APP")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder
        .build()
        .map_err(|e| CommunityError::Configuration(e.to_string()))?;

    config
        .try_deserialize()
        .map_err(|e| CommunityError::Configuration(e.to_string()))
}

/// Load configuration from environment variables only
pub fn load_from_env() -> Result<AppConfig> {
    // Try to load from .env file
    dotenvy::dotenv().ok();

    let defaults = CommunityConfig::default();
    let community = CommunityConfig {
        community_url: std::env::var("COMMUNITY_URL").unwrap_or(defaults.community_url),
        community_landing_url: std::env::var("COMMUNITY_LANDING_URL")
            .unwrap_or(defaults.community_landing_url),
        logo_prefix: std::env::var("COMMUNITY_LOGO_PREFIX").unwrap_or(defaults.logo_prefix),
        default_locale: std::env::var("COMMUNITY_DEFAULT_LOCALE")
            .unwrap_or(defaults.default_locale),
    };

    if community.community_url.is_empty() || community.community_landing_url.is_empty() {
        return Err(CommunityError::Configuration(
            "community URL bases must not be empty".to_string(),
        ));
    }

    Ok(AppConfig {
        community,
        settings: super::types::AppSettings::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;

    // Environment variables are process-wide; tests touching them take this lock
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write_temp_config(name: &str, contents: &str) -> String {
        let path = std::env::temp_dir().join(format!("{}-{}.toml", name, std::process::id()));
        fs::write(&path, contents).unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let config = load_config(Some("/nonexistent/community.toml")).unwrap();
        assert_eq!(config.community.community_url, "https://app.octobot.cloud");
        assert_eq!(config.community.community_landing_url, "https://www.octobot.cloud");
        assert_eq!(config.community.default_locale, "en");
    }

    #[test]
    fn test_file_overrides_defaults() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = write_temp_config(
            "community-file-override",
            r#"
[community]
community_url = "https://staging.example.com"
default_locale = "fr"
"#,
        );

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.community.community_url, "https://staging.example.com");
        assert_eq!(config.community.default_locale, "fr");
        // untouched keys keep their defaults
        assert_eq!(config.community.community_landing_url, "https://www.octobot.cloud");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_malformed_file_is_configuration_error() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = write_temp_config("community-malformed", "[community\nbroken = ");

        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, CommunityError::Configuration(_)));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_env_overrides_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let path = write_temp_config(
            "community-env-override",
            r#"
[community]
community_url = "https://file.example"
community_landing_url = "https://landing.file.example"

[settings]
log_level = "warn"
"#,
        );

        std::env::set_var("APP__COMMUNITY__COMMUNITY_URL", "https://env.example");
        let config = load_config(Some(&path));
        std::env::remove_var("APP__COMMUNITY__COMMUNITY_URL");

        let config = config.unwrap();
        assert_eq!(config.community.community_url, "https://env.example");
        // keys without an env override still come from the file
        assert_eq!(config.community.community_landing_url, "https://landing.file.example");
        assert_eq!(config.settings.log_level, "warn");

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_from_env_reads_community_vars() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        std::env::set_var("COMMUNITY_URL", "https://app.env.example");
        std::env::set_var("COMMUNITY_DEFAULT_LOCALE", "de");
        let config = load_from_env();
        std::env::remove_var("COMMUNITY_URL");
        std::env::remove_var("COMMUNITY_DEFAULT_LOCALE");

        let config = config.unwrap();
        assert_eq!(config.community.community_url, "https://app.env.example");
        assert_eq!(config.community.community_landing_url, "https://www.octobot.cloud");
        assert_eq!(config.community.default_locale, "de");
    }

    #[test]
    fn test_load_from_env_rejects_empty_base() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        std::env::set_var("COMMUNITY_LANDING_URL", "");
        let result = load_from_env();
        std::env::remove_var("COMMUNITY_LANDING_URL");

        assert!(matches!(result, Err(CommunityError::Configuration(_))));
    }
}
