use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::trace;

use super::constants::{
    AUTO_UPDATED_CATEGORIES, CATEGORY_NAME_TRANSLATIONS_BY_SLUG, DEFAULT_LOGO_NAME,
    DEFAULT_LOGO_NAME_BY_SLUG,
};
use super::identifiers::IdentifiersProvider;
use super::{null_as_default, FlexibleRecord};

/// Category a strategy belongs to
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryData {
    /// Taxonomy key, used for every static table lookup
    #[serde(deserialize_with = "null_as_default")]
    pub slug: String,
    /// Display names by locale code
    #[serde(deserialize_with = "null_as_default")]
    pub name_translations: HashMap<String, String>,
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub category_type: String,
    /// Free-form metadata; only `external_link` is read
    #[serde(deserialize_with = "null_as_default")]
    pub metadata: Map<String, Value>,
}

impl FlexibleRecord for CategoryData {}

impl CategoryData {
    pub fn new(slug: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            ..Self::default()
        }
    }

    /// Landing page linked from `metadata.external_link`
    ///
    /// A `blog` link wins over a `features` link. Returns an empty string
    /// when neither is set.
    pub fn get_url(&self, ids: &IdentifiersProvider) -> String {
        let Some(external_link) = self.metadata.get("external_link").and_then(Value::as_object)
        else {
            return String::new();
        };
        if let Some(blog_slug) = link_target(external_link.get("blog")) {
            trace!(slug = %self.slug, blog_slug = %blog_slug, "Category links to blog");
            return format!("{}/en/blog/{}", ids.community_landing_url(), blog_slug);
        }
        if let Some(features_slug) = link_target(external_link.get("features")) {
            trace!(slug = %self.slug, features_slug = %features_slug, "Category links to features");
            return format!("{}/features/{}", ids.community_landing_url(), features_slug);
        }
        String::new()
    }

    /// Logo filename for strategies of this category
    pub fn get_default_logo_url(&self) -> &'static str {
        DEFAULT_LOGO_NAME_BY_SLUG
            .get(self.slug.as_str())
            .copied()
            .unwrap_or(DEFAULT_LOGO_NAME)
    }

    /// Display name for `locale`
    ///
    /// A static override table for the slug replaces `name_translations`
    /// entirely. When `locale` is missing, `default_locale` itself is
    /// returned, not the translation for it.
    pub fn get_name<'a>(&'a self, locale: &str, default_locale: &'a str) -> &'a str {
        if let Some(overrides) = CATEGORY_NAME_TRANSLATIONS_BY_SLUG.get(self.slug.as_str()) {
            return overrides.get(locale).copied().unwrap_or(default_locale);
        }
        self.name_translations
            .get(locale)
            .map(String::as_str)
            .unwrap_or(default_locale)
    }

    pub fn is_auto_updated(&self) -> bool {
        AUTO_UPDATED_CATEGORIES.contains(self.slug.as_str())
    }
}

/// Link target from a non-empty string or a non-zero number
fn link_target(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
        _ => None,
    }
}
