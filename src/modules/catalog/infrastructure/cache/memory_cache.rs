use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

use crate::modules::catalog::domain::entities::SeriesRecord;
use crate::modules::catalog::domain::repositories::{CacheStats, CatalogCache};

/// Cached entry with TTL support
#[derive(Debug, Clone)]
struct CacheEntry {
    data: Vec<SeriesRecord>,
    created_at: Instant,
    ttl: Duration,
}

impl CacheEntry {
    fn new(data: Vec<SeriesRecord>, ttl: Duration) -> Self {
        Self {
            data,
            created_at: Instant::now(),
            ttl,
        }
    }

    fn is_expired(&self) -> bool {
        self.created_at.elapsed() > self.ttl
    }
}

/// In-process catalog cache with TTL and oldest-first eviction
///
/// Expired entries are dropped lazily on read, or in bulk by `purge_expired`.
#[derive(Debug, Clone)]
pub struct MemoryCatalogCache {
    cache: Arc<DashMap<String, CacheEntry>>,
    hits: Arc<AtomicU64>,
    misses: Arc<AtomicU64>,
    cleanups: Arc<AtomicU64>,
    max_entries: usize,
}

impl MemoryCatalogCache {
    pub fn new(max_entries: usize) -> Self {
        Self {
            cache: Arc::new(DashMap::new()),
            hits: Arc::new(AtomicU64::new(0)),
            misses: Arc::new(AtomicU64::new(0)),
            cleanups: Arc::new(AtomicU64::new(0)),
            max_entries: max_entries.max(1),
        }
    }

    /// Normalized key: trimmed and lowercased
    fn cache_key(key: &str) -> String {
        let trimmed = key.trim();
        let mut result = String::with_capacity(trimmed.len());
        for ch in trimmed.chars() {
            result.extend(ch.to_lowercase());
        }
        result
    }

    /// Remove every expired entry, returning how many were dropped
    pub fn purge_expired(&self) -> usize {
        let expired_keys: Vec<String> = self
            .cache
            .iter()
            .filter(|entry| entry.value().is_expired())
            .map(|entry| entry.key().clone())
            .collect();

        let expired_count = expired_keys.len();
        for key in expired_keys {
            self.cache.remove(&key);
        }

        if expired_count > 0 {
            self.cleanups
                .fetch_add(expired_count as u64, Ordering::Relaxed);
            info!("Cleaned up {} expired catalog entries", expired_count);
        }

        expired_count
    }

    fn evict_oldest_entry(&self) {
        let oldest = self
            .cache
            .iter()
            .min_by_key(|entry| entry.value().created_at)
            .map(|entry| entry.key().clone());

        if let Some(key) = oldest {
            self.cache.remove(&key);
            debug!("Evicted oldest catalog entry: {}", key);
        }
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Default for MemoryCatalogCache {
    fn default() -> Self {
        Self::new(256)
    }
}

#[async_trait]
impl CatalogCache for MemoryCatalogCache {
    async fn get(&self, key: &str) -> Option<Vec<SeriesRecord>> {
        let key = Self::cache_key(key);

        let expired = match self.cache.get(&key) {
            Some(entry) if !entry.is_expired() => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                debug!("Cache hit for key: {}", key);
                return Some(entry.data.clone());
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            self.cache.remove(&key);
            self.cleanups.fetch_add(1, Ordering::Relaxed);
            debug!("Removed expired cache entry for key: {}", key);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!("Cache miss for key: {}", key);
        None
    }

    async fn put(&self, key: &str, records: Vec<SeriesRecord>, ttl: Duration) {
        let key = Self::cache_key(key);

        if !self.cache.contains_key(&key) && self.cache.len() >= self.max_entries {
            self.purge_expired();
            if self.cache.len() >= self.max_entries {
                self.evict_oldest_entry();
            }
        }

        debug!(
            "Cached {} records for key: {} with TTL: {:?}",
            records.len(),
            key,
            ttl
        );
        self.cache.insert(key, CacheEntry::new(records, ttl));
    }

    async fn invalidate(&self, key: &str) {
        let key = Self::cache_key(key);
        if self.cache.remove(&key).is_some() {
            debug!("Invalidated cache entry for key: {}", key);
        }
    }

    async fn clear(&self) {
        self.cache.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.cleanups.store(0, Ordering::Relaxed);
        info!("Catalog cache cleared");
    }

    async fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.cache.len(),
            expired_cleanups: self.cleanups.load(Ordering::Relaxed),
        }
    }
}
