use async_trait::async_trait;

use crate::modules::catalog::domain::entities::SeriesRecord;
use crate::shared::errors::AppResult;

/// A provider scraper that returns one catalog page as normalized records
///
/// Fetching and site-specific parsing live behind this trait. Every record
/// it returns must carry an id prefixed with `prefix()`.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Short provider prefix, e.g. `hmm`
    fn prefix(&self) -> &str;

    /// Fetch the provider's records for a catalog, in the provider's order
    async fn fetch_catalog(&self, catalog_key: &str) -> AppResult<Vec<SeriesRecord>>;
}
