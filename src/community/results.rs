use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use super::constants::DEFAULT_TIME_UNIT;
use super::FlexibleRecord;

/// Profitability by time bucket, in payload order
///
/// Bucket order is significant: ties between buckets are broken in favour
/// of the one listed first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfitabilitySeries(Vec<(String, Decimal)>);

impl ProfitabilitySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Decimal)> {
        self.0.iter().map(|(unit, value)| (unit.as_str(), value))
    }

    pub fn get(&self, unit: &str) -> Option<Decimal> {
        self.0.iter().find(|(u, _)| u == unit).map(|(_, value)| *value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Decimal)> for ProfitabilitySeries {
    fn from_iter<I: IntoIterator<Item = (K, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(unit, value)| (unit.into(), value)).collect())
    }
}

impl Serialize for ProfitabilitySeries {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

impl<'de> Deserialize<'de> for ProfitabilitySeries {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // serde_json's `preserve_order` keeps the payload's bucket order here
        let raw = Option::<Map<String, Value>>::deserialize(deserializer)?.unwrap_or_default();
        raw.into_iter()
            .map(|(unit, value)| {
                <Decimal as Deserialize>::deserialize(value)
                    .map(|value| (unit, value))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Performance results of a strategy
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsData {
    pub profitability: ProfitabilitySeries,
    /// Reference market performance over the same buckets
    pub reference_market_profitability: ProfitabilitySeries,
}

impl FlexibleRecord for ResultsData {}

impl ResultsData {
    /// Highest reference market bucket, earliest one on ties
    fn best_bucket(&self) -> Option<(&str, Decimal)> {
        let mut buckets = self.reference_market_profitability.iter();
        let (first_unit, first_value) = buckets.next()?;
        let mut best = (first_unit, *first_value);
        for (unit, value) in buckets {
            if *value > best.1 {
                best = (unit, *value);
            }
        }
        Some(best)
    }

    /// Best reference market value, zero when no data is available
    pub fn get_max_value(&self) -> Decimal {
        self.best_bucket()
            .map(|(_, value)| value)
            .unwrap_or(Decimal::ZERO)
    }

    /// Label of the best reference market bucket, `"1m"` when no data is available
    pub fn get_max_unit(&self) -> &str {
        self.best_bucket()
            .map(|(unit, _)| unit)
            .unwrap_or(DEFAULT_TIME_UNIT)
    }
}
