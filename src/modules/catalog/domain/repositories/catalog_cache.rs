use async_trait::async_trait;
use std::time::Duration;

use crate::modules::catalog::domain::entities::SeriesRecord;

/// Key-value store memoizing aggregated catalogs
#[async_trait]
pub trait CatalogCache: Send + Sync {
    /// Cached catalog, if present and not expired
    async fn get(&self, key: &str) -> Option<Vec<SeriesRecord>>;

    /// Store a catalog for `ttl`
    async fn put(&self, key: &str, records: Vec<SeriesRecord>, ttl: Duration);

    async fn invalidate(&self, key: &str);

    async fn clear(&self);

    async fn stats(&self) -> CacheStats;
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
    pub expired_cleanups: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_rate() {
        assert_eq!(CacheStats::default().hit_rate(), 0.0);

        let stats = CacheStats {
            hits: 3,
            misses: 1,
            ..Default::default()
        };
        assert_eq!(stats.hit_rate(), 0.75);
    }
}
