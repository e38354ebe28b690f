use serde::{Deserialize, Serialize};
use std::fmt;

/// How a provider expresses the popularity or quality of a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RatingType {
    /// User rating already on a 0-10 scale
    Direct,
    /// Raw view count
    Views,
    /// 0-100 percentage score
    Percentage,
    /// 1-5 star rating
    Stars,
    /// Score derived from position in a trending list
    Trending,
}

impl RatingType {
    /// Parse a type tag, tolerating case; unknown tags yield `None`
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "direct" => Some(Self::Direct),
            "views" => Some(Self::Views),
            "percentage" => Some(Self::Percentage),
            "stars" => Some(Self::Stars),
            "trending" => Some(Self::Trending),
            _ => None,
        }
    }
}

impl fmt::Display for RatingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RatingType::Direct => "direct",
            RatingType::Views => "views",
            RatingType::Percentage => "percentage",
            RatingType::Stars => "stars",
            RatingType::Trending => "trending",
        };
        write!(f, "{}", name)
    }
}

/// One provider's contribution to a record's rating
///
/// Only the raw value and its type are stored. The 0-10 value is always
/// recomputed through `RatingNormalizer::resolve`, so it can never drift
/// from `raw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatingEntry {
    pub raw: f64,
    #[serde(rename = "type")]
    pub rating_type: RatingType,
}

impl RatingEntry {
    pub fn new(raw: f64, rating_type: RatingType) -> Self {
        Self { raw, rating_type }
    }

    pub fn direct(raw: f64) -> Self {
        Self::new(raw, RatingType::Direct)
    }

    pub fn views(count: f64) -> Self {
        Self::new(count, RatingType::Views)
    }
}
