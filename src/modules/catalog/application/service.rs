use futures::future::join_all;
use std::sync::Arc;

use super::config::CatalogServiceConfig;
use crate::modules::catalog::domain::{
    entities::{ProviderCatalog, SeriesRecord},
    repositories::{CatalogCache, CatalogSource},
    services::CatalogAggregator,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::LogContext;

/// Builds aggregated catalogs from a fixed set of provider sources
///
/// # Workflow:
/// 1. Serve from cache when possible
/// 2. Fetch every source concurrently; a failing or slow source contributes
///    zero records instead of failing the whole catalog
/// 3. Run one synchronous aggregation over the fetched snapshot
/// 4. Cache and return the result
pub struct CatalogService {
    sources: Vec<Arc<dyn CatalogSource>>,
    cache: Arc<dyn CatalogCache>,
    aggregator: CatalogAggregator,
    config: CatalogServiceConfig,
}

impl CatalogService {
    /// Create a new service with default configuration
    pub fn new(sources: Vec<Arc<dyn CatalogSource>>, cache: Arc<dyn CatalogCache>) -> Self {
        Self {
            sources,
            cache,
            aggregator: CatalogAggregator::default(),
            config: CatalogServiceConfig::default(),
        }
    }

    /// Create a new service with a custom aggregator and configuration
    pub fn with_config(
        sources: Vec<Arc<dyn CatalogSource>>,
        cache: Arc<dyn CatalogCache>,
        aggregator: CatalogAggregator,
        config: CatalogServiceConfig,
    ) -> AppResult<Self> {
        config.validate().map_err(AppError::ValidationError)?;

        Ok(Self {
            sources,
            cache,
            aggregator,
            config,
        })
    }

    pub fn config(&self) -> &CatalogServiceConfig {
        &self.config
    }

    pub async fn build_catalog(&self, catalog_key: &str) -> AppResult<Vec<SeriesRecord>> {
        if catalog_key.trim().is_empty() {
            return Err(AppError::ValidationError(
                "Catalog key cannot be empty".to_string(),
            ));
        }

        if let Some(cached) = self.cache.get(catalog_key).await {
            log::debug!("SERVICE: Serving '{}' from cache", catalog_key);
            return Ok(cached);
        }

        let catalogs = self.fetch_all(catalog_key).await;
        let records = self.aggregator.aggregate(&catalogs);

        let ttl = if records.is_empty() {
            self.config.empty_cache_ttl
        } else {
            self.config.cache_ttl
        };
        self.cache.put(catalog_key, records.clone(), ttl).await;

        Ok(records)
    }

    /// Drop any cached copy and rebuild from the sources
    pub async fn refresh_catalog(&self, catalog_key: &str) -> AppResult<Vec<SeriesRecord>> {
        self.cache.invalidate(catalog_key).await;
        self.build_catalog(catalog_key).await
    }

    /// Fetch all sources concurrently, keeping the sources' order
    async fn fetch_all(&self, catalog_key: &str) -> Vec<ProviderCatalog> {
        let fetches = self
            .sources
            .iter()
            .map(|source| self.fetch_one(source.as_ref(), catalog_key));

        join_all(fetches).await
    }

    async fn fetch_one(&self, source: &dyn CatalogSource, catalog_key: &str) -> ProviderCatalog {
        let prefix = source.prefix().to_string();
        LogContext::provider_fetch(&prefix, catalog_key, None);

        let fetched =
            tokio::time::timeout(self.config.fetch_timeout, source.fetch_catalog(catalog_key))
                .await
                .map_err(AppError::from)
                .and_then(|result| result);

        match fetched {
            Ok(records) => {
                let total = records.len();
                let mut records: Vec<SeriesRecord> = records
                    .into_iter()
                    .filter(|record| !record.id.trim().is_empty() && !record.name.trim().is_empty())
                    .collect();

                if records.len() < total {
                    log::warn!(
                        "SERVICE: Dropped {} records without id or name from {}",
                        total - records.len(),
                        prefix
                    );
                }

                if records.len() > self.config.max_records_per_provider {
                    log::debug!(
                        "SERVICE: Capping {} records from {} at {}",
                        records.len(),
                        prefix,
                        self.config.max_records_per_provider
                    );
                    records.truncate(self.config.max_records_per_provider);
                }

                LogContext::provider_fetch(&prefix, catalog_key, Some(records.len()));
                ProviderCatalog::new(prefix, records)
            }
            Err(e) => {
                LogContext::provider_failure(&prefix, catalog_key, &e.to_string());
                ProviderCatalog::new(prefix, Vec::new())
            }
        }
    }
}
