//! Cross-provider series catalog aggregation.
//!
//! Provider scrapers hand over flat lists of [`SeriesRecord`]s. The
//! [`CatalogAggregator`] detects the same title across providers by fuzzy
//! name matching, merges the duplicates field by field, normalizes every
//! provider's rating onto a common 0-10 scale and ranks the result by
//! metadata completeness. [`CatalogService`] wraps that in a concurrent
//! fetch with per-provider timeouts and a TTL cache.

pub mod modules;
pub mod shared;

pub use modules::catalog::{
    normalize_name, similarity, sort_catalog, AggregationMetrics, CacheStats, CatalogAggregator,
    CatalogCache, CatalogService, CatalogServiceConfig, CatalogSource, DuplicateDetector,
    MemoryCatalogCache, MetadataQualityScorer, NameNormalizer, PrimaryTieBreak, ProviderCatalog,
    RatingConfig, RatingConfigBuilder, RatingEntry, RatingNormalizer, RatingType, SeriesMerger,
    SeriesRecord,
};
pub use shared::{AppError, AppResult};
