//! Community URL bases

use crate::config::types::{default_community_landing_url, default_community_url, CommunityConfig};

/// Provides the base URLs that community paths are joined onto
///
/// The bases are taken as-is apart from a single trailing `/`, which is
/// dropped so joined paths never contain `//`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifiersProvider {
    community_url: String,
    community_landing_url: String,
}

impl IdentifiersProvider {
    pub fn new(community_url: impl Into<String>, community_landing_url: impl Into<String>) -> Self {
        Self {
            community_url: trim_trailing_slash(community_url.into()),
            community_landing_url: trim_trailing_slash(community_landing_url.into()),
        }
    }

    /// Production endpoints
    pub fn production() -> Self {
        Self::new(default_community_url(), default_community_landing_url())
    }

    /// Base URL of the community app
    pub fn community_url(&self) -> &str {
        &self.community_url
    }

    /// Base URL of the community landing site
    pub fn community_landing_url(&self) -> &str {
        &self.community_landing_url
    }
}

impl Default for IdentifiersProvider {
    fn default() -> Self {
        Self::production()
    }
}

impl From<&CommunityConfig> for IdentifiersProvider {
    fn from(config: &CommunityConfig) -> Self {
        Self::new(
            config.community_url.clone(),
            config.community_landing_url.clone(),
        )
    }
}

fn trim_trailing_slash(mut url: String) -> String {
    if url.ends_with('/') {
        url.pop();
    }
    url
}
