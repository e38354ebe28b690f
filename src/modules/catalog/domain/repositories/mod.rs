pub mod catalog_cache;
pub mod catalog_source;

pub use catalog_cache::{CacheStats, CatalogCache};
pub use catalog_source::CatalogSource;
