use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::modules::catalog::domain::value_objects::{
    provider_prefix, provider_slug, RatingEntry, RatingType,
};

/// One title as seen by one or more providers
///
/// Provider scrapers hand these over with only identity and raw metadata
/// filled in. The aggregator owns every derived field (`providers`,
/// `provider_slugs`, `rating_breakdown`, `rating`, `metadata_score`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesRecord {
    /// `<providerPrefix>-<providerSlug>`
    pub id: String,

    /// Display title
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,

    #[serde(default)]
    pub genres: Vec<String>,

    #[serde(
        default,
        deserialize_with = "lenient_year",
        skip_serializing_if = "Option::is_none"
    )]
    pub year: Option<i32>,

    /// 0-10; after aggregation always the weighted average of `rating_breakdown`
    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating: Option<f64>,

    #[serde(
        default,
        deserialize_with = "lenient_rating_type",
        skip_serializing_if = "Option::is_none"
    )]
    pub rating_type: Option<RatingType>,

    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub view_count: Option<f64>,

    /// Contributing provider prefixes in discovery order
    #[serde(default)]
    pub providers: Vec<String>,

    #[serde(default)]
    pub provider_slugs: BTreeMap<String, String>,

    /// `None` marks a provider that contributed metadata but no usable rating
    #[serde(default)]
    pub rating_breakdown: BTreeMap<String, Option<RatingEntry>>,

    #[serde(default)]
    pub metadata_score: u32,

    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub last_updated: Option<DateTime<Utc>>,
}

impl SeriesRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            poster: None,
            description: None,
            studio: None,
            genres: Vec::new(),
            year: None,
            rating: None,
            rating_type: None,
            view_count: None,
            providers: Vec::new(),
            provider_slugs: BTreeMap::new(),
            rating_breakdown: BTreeMap::new(),
            metadata_score: 0,
            last_updated: None,
        }
    }

    pub fn provider_prefix(&self) -> String {
        provider_prefix(&self.id)
    }

    pub fn provider_slug(&self) -> String {
        provider_slug(&self.id)
    }

    /// Providers behind this record; a raw scraper record counts as its own provider
    pub fn effective_providers(&self) -> Vec<String> {
        if self.providers.is_empty() {
            vec![self.provider_prefix()]
        } else {
            self.providers.clone()
        }
    }

    /// Slug mapping; a raw scraper record maps its own prefix to its own slug
    pub fn effective_provider_slugs(&self) -> BTreeMap<String, String> {
        if self.provider_slugs.is_empty() {
            BTreeMap::from([(self.provider_prefix(), self.provider_slug())])
        } else {
            self.provider_slugs.clone()
        }
    }

    pub fn provider_count(&self) -> usize {
        self.providers.len().max(1)
    }

    /// Rating entry implied by the record's standalone fields
    ///
    /// A rating (typed, or direct when untyped) wins over a view count.
    pub fn standalone_rating_entry(&self) -> Option<RatingEntry> {
        if let Some(rating) = self.rating {
            return Some(RatingEntry::new(
                rating,
                self.rating_type.unwrap_or(RatingType::Direct),
            ));
        }
        self.view_count.map(RatingEntry::views)
    }
}

/// All records one provider returned for a catalog, in the provider's order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderCatalog {
    pub provider: String,
    pub records: Vec<SeriesRecord>,
}

impl ProviderCatalog {
    pub fn new(provider: impl Into<String>, records: Vec<SeriesRecord>) -> Self {
        Self {
            provider: provider.into(),
            records,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// Scraped payloads are loosely typed. Anything that is not usable is absent.

fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

fn lenient_year<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(value_as_f64)
        .filter(|y| y.is_finite() && y.fract() == 0.0)
        .and_then(|y| i32::try_from(y as i64).ok()))
}

fn lenient_rating_type<'de, D>(deserializer: D) -> Result<Option<RatingType>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(tag)) => RatingType::parse(&tag),
        _ => None,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(raw)) => DateTime::parse_from_rfc3339(raw.trim())
            .ok()
            .map(|ts| ts.with_timezone(&Utc)),
        _ => None,
    })
}
