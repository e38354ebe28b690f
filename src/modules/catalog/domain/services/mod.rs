pub mod catalog_aggregator;
pub mod matching;
pub mod metadata_quality;
pub mod metrics;
pub mod rating;
pub mod series_merger;

pub use catalog_aggregator::{sort_catalog, CatalogAggregator};
pub use matching::{normalize_name, similarity, DuplicateDetector, NameNormalizer};
pub use metadata_quality::MetadataQualityScorer;
pub use metrics::AggregationMetrics;
pub use rating::{RatingConfig, RatingConfigBuilder, RatingNormalizer};
pub use series_merger::{PrimaryTieBreak, SeriesMerger};
