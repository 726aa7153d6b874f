//! Community strategy data model
//!
//! Records are deserialized from already-fetched platform payloads and then
//! queried for derived values (names, URLs, logos, risk). Nothing here
//! performs I/O or mutates after construction.
//!
//! # Resolution order
//!
//! ```text
//!  StrategyData (logo_url, content.name_translations, attributes)
//!       │ falls back to
//!       ▼
//!  CategoryData (slug → static tables, name_translations, metadata)
//!       │ falls back to
//!       ▼
//!  constants (DEFAULT_LOGO_NAME, "1m", default locale code)
//! ```
//!
//! # Example
//!
//! ```
//! use community_strategies::community::{IdentifiersProvider, StrategyData, FlexibleRecord};
//!
//! let strategy = StrategyData::from_json(
//!     r#"{"slug": "top-10", "category": {"slug": "coingecko-index"}}"#,
//! ).unwrap();
//! let ids = IdentifiersProvider::new("https://app.example.com", "https://www.example.com");
//!
//! assert_eq!(strategy.get_url(&ids), "https://www.example.com/features/crypto-basket");
//! assert_eq!(strategy.get_logo_url("/logos/"), "/logos/crypto-basket.png");
//! ```

pub mod category;
pub mod constants;
pub mod identifiers;
pub mod results;
pub mod strategy;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::common::errors::{CommunityError, Result};

pub use category::CategoryData;
pub use identifiers::IdentifiersProvider;
pub use results::{ProfitabilitySeries, ResultsData};
pub use strategy::StrategyData;

/// Permissive construction from untyped payloads
///
/// Unknown keys are ignored, missing or `null` keys take their field
/// default, and anything other than a JSON object is rejected.
pub trait FlexibleRecord: DeserializeOwned {
    fn from_value(value: Value) -> Result<Self> {
        // serde would otherwise fill the fields positionally from an array
        if !value.is_object() {
            return Err(CommunityError::invalid_value("record", "a JSON object"));
        }
        Ok(serde_json::from_value(value)?)
    }

    fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }
}

/// Parse a JSON array of strategies, keeping payload order
pub fn parse_strategies(json: &str) -> Result<Vec<StrategyData>> {
    let entries: Vec<Value> = serde_json::from_str(json)?;
    let strategies = entries
        .into_iter()
        .map(StrategyData::from_value)
        .collect::<Result<Vec<_>>>()?;
    debug!(count = strategies.len(), "Parsed community strategies");
    Ok(strategies)
}

/// Treat an explicit `null` like a missing key
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_strategies_keeps_order() {
        let strategies = parse_strategies(
            r#"[{"slug": "b", "extra": 1}, {"slug": "a"}, {}]"#,
        )
        .unwrap();
        let slugs: Vec<&str> = strategies.iter().map(|s| s.slug.as_str()).collect();
        assert_eq!(slugs, vec!["b", "a", ""]);
    }

    #[test]
    fn test_parse_strategies_rejects_malformed_element() {
        let err = parse_strategies(r#"[{"slug": "a"}, {"slug": 42}]"#).unwrap_err();
        assert!(matches!(err, CommunityError::JsonParse(_)));
    }

    #[test]
    fn test_from_json_rejects_non_object() {
        assert!(StrategyData::from_json("[]").is_err());
        assert!(CategoryData::from_json("\"slug\"").is_err());

        // arrays must not be read positionally into the fields
        let err = StrategyData::from_json(r#"["id-1", "slug-1"]"#).unwrap_err();
        assert!(matches!(err, CommunityError::InvalidValue { field: "record", .. }));
        assert!(ResultsData::from_value(json!([{}, {}])).is_err());
        assert!(StrategyData::from_value(Value::Null).is_err());
    }

    #[test]
    fn test_parse_strategies_rejects_non_object_element() {
        let err = parse_strategies(r#"[{"slug": "a"}, ["id-2", "b"]]"#).unwrap_err();
        assert!(matches!(err, CommunityError::InvalidValue { .. }));
    }
}
