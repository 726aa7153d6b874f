use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use super::category::CategoryData;
use super::constants::{EXTENSION_CATEGORIES, FORCED_URL_PATH_BY_SLUG};
use super::identifiers::IdentifiersProvider;
use super::results::ResultsData;
use super::{null_as_default, FlexibleRecord};
use crate::common::errors::{CommunityError, Result};
use crate::common::types::ProfileRisk;

/// A strategy published on the community platform
///
/// Derived values are resolved from strategy-level data first, then from
/// the owned [`CategoryData`], then from static defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrategyData {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author_id: String,
    /// Expected to hold a `name_translations` mapping
    #[serde(deserialize_with = "null_as_default")]
    pub content: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub category: CategoryData,
    #[serde(deserialize_with = "null_as_default")]
    pub results: ResultsData,
    /// Explicit logo, empty when the category default should be used
    #[serde(deserialize_with = "null_as_default")]
    pub logo_url: String,
    /// Expected to hold a `risk` level name
    #[serde(deserialize_with = "null_as_default")]
    pub attributes: Map<String, Value>,
    #[serde(deserialize_with = "null_as_default")]
    pub visibility: String,
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: String,
}

impl FlexibleRecord for StrategyData {}

impl StrategyData {
    /// Display name for `locale`
    ///
    /// Returns `default_locale` itself when no translation exists for
    /// `locale`. Unlike [`CategoryData::get_name`], the translation table is
    /// required: a `content` without `name_translations` is an error.
    pub fn get_name<'a>(&'a self, locale: &str, default_locale: &'a str) -> Result<&'a str> {
        let translations = self
            .content
            .get("name_translations")
            .ok_or_else(|| CommunityError::missing_key("content", "name_translations"))?
            .as_object()
            .ok_or_else(|| {
                CommunityError::invalid_value("content.name_translations", "a mapping")
            })?;

        match translations.get(locale) {
            Some(name) => name.as_str().ok_or_else(|| {
                CommunityError::invalid_value("content.name_translations", "string names")
            }),
            None => Ok(default_locale),
        }
    }

    /// Public page of the strategy, or the category's forced landing page
    pub fn get_url(&self, ids: &IdentifiersProvider) -> String {
        if let Some(path) = FORCED_URL_PATH_BY_SLUG.get(self.category.slug.as_str()) {
            trace!(slug = %self.slug, category = %self.category.slug, path, "Using forced URL path");
            return format!("{}/{}", ids.community_landing_url(), path);
        }
        self.get_product_url(ids)
    }

    /// Public page of the strategy, regardless of category overrides
    pub fn get_product_url(&self, ids: &IdentifiersProvider) -> String {
        format!("{}/strategies/{}", ids.community_url(), self.slug)
    }

    /// Risk level from `attributes.risk`
    ///
    /// Unknown level names resolve to [`ProfileRisk::Moderate`]. A missing
    /// `risk` attribute is an error.
    pub fn get_risk(&self) -> Result<ProfileRisk> {
        let risk = self
            .attributes
            .get("risk")
            .ok_or_else(|| CommunityError::missing_key("attributes", "risk"))?
            .as_str()
            .ok_or_else(|| CommunityError::invalid_value("attributes.risk", "a string"))?
            .to_uppercase();

        Ok(ProfileRisk::from_name(&risk).unwrap_or_else(|| {
            debug!(slug = %self.slug, risk = %risk, "Unknown risk level, using MODERATE");
            ProfileRisk::Moderate
        }))
    }

    /// Explicit logo URL, or `prefix` followed by the category's default logo
    pub fn get_logo_url(&self, prefix: &str) -> String {
        if !self.logo_url.is_empty() {
            return self.logo_url.clone();
        }
        format!("{}{}", prefix, self.category.get_default_logo_url())
    }

    pub fn is_auto_updated(&self) -> bool {
        self.category.is_auto_updated()
    }

    pub fn is_extension_only(&self) -> bool {
        EXTENSION_CATEGORIES.contains(self.category.slug.as_str())
    }
}
