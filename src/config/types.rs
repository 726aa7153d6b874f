//! Configuration types

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Community platform endpoints and presentation defaults
    #[serde(default)]
    pub community: CommunityConfig,
    /// General application settings
    #[serde(default)]
    pub settings: AppSettings,
}

/// Community platform configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunityConfig {
    /// Base URL of the community app (strategy pages)
    #[serde(default = "default_community_url")]
    pub community_url: String,
    /// Base URL of the community landing site (blog, features)
    #[serde(default = "default_community_landing_url")]
    pub community_landing_url: String,
    /// Prefix prepended to default logo filenames
    #[serde(default = "default_logo_prefix")]
    pub logo_prefix: String,
    /// Locale returned when a translation is missing
    #[serde(default = "default_locale")]
    pub default_locale: String,
}

impl Default for CommunityConfig {
    fn default() -> Self {
        Self {
            community_url: default_community_url(),
            community_landing_url: default_community_landing_url(),
            logo_prefix: default_logo_prefix(),
            default_locale: default_locale(),
        }
    }
}

pub(crate) fn default_community_url() -> String {
    "https://app.octobot.cloud".to_string()
}

pub(crate) fn default_community_landing_url() -> String {
    "https://www.octobot.cloud".to_string()
}

fn default_logo_prefix() -> String {
    "https://www.octobot.cloud/assets/images/strategies/".to_string()
}

fn default_locale() -> String {
    crate::community::constants::DEFAULT_LOCALE.to_string()
}

/// General application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
