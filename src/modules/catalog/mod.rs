pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{CatalogService, CatalogServiceConfig};
pub use domain::entities::{ProviderCatalog, SeriesRecord};
pub use domain::repositories::{CacheStats, CatalogCache, CatalogSource};
pub use domain::services::{
    normalize_name, similarity, sort_catalog, AggregationMetrics, CatalogAggregator,
    DuplicateDetector, MetadataQualityScorer, NameNormalizer, PrimaryTieBreak, RatingConfig,
    RatingConfigBuilder, RatingNormalizer, SeriesMerger,
};
pub use domain::value_objects::{RatingEntry, RatingType};
pub use infrastructure::MemoryCatalogCache;
