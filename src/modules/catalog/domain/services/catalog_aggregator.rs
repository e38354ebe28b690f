use std::cmp::Ordering;
use std::collections::BTreeMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::matching::DuplicateDetector;
use super::metrics::AggregationMetrics;
use super::series_merger::{without_studio, SeriesMerger};
use crate::modules::catalog::domain::entities::{ProviderCatalog, SeriesRecord};
use crate::shared::utils::{LogContext, TimedOperation};

/// Reduces several provider catalogs into one deduplicated, ranked catalog
///
/// # Pipeline:
/// 1. Walk providers in input order, and each provider's records in order
/// 2. Compare the record with every accumulated entry; the first duplicate wins
/// 3. Merge into that entry, or seed a new one
/// 4. Stable sort: metadata score desc, provider count desc, name asc
///
/// The scan is O(n²) in the total record count. First-match (not best-match)
/// is part of the contract: changing it changes merge outcomes.
#[derive(Debug, Clone, Default)]
pub struct CatalogAggregator {
    merger: SeriesMerger,
    detector: DuplicateDetector,
}

impl CatalogAggregator {
    pub fn new(merger: SeriesMerger) -> Self {
        Self {
            merger,
            detector: DuplicateDetector::new(),
        }
    }

    pub fn merger(&self) -> &SeriesMerger {
        &self.merger
    }

    pub fn aggregate(&self, catalogs: &[ProviderCatalog]) -> Vec<SeriesRecord> {
        self.aggregate_with_metrics(catalogs).0
    }

    pub fn aggregate_with_metrics(
        &self,
        catalogs: &[ProviderCatalog],
    ) -> (Vec<SeriesRecord>, AggregationMetrics) {
        let timer = TimedOperation::new("Catalog aggregation");
        let mut metrics = AggregationMetrics {
            provider_count: catalogs.len(),
            input_count: catalogs.iter().map(ProviderCatalog::len).sum(),
            ..Default::default()
        };

        let mut accumulator: Vec<SeriesRecord> = Vec::new();

        for catalog in catalogs {
            log::debug!(
                "AGGREGATOR: Consuming {} records from '{}'",
                catalog.len(),
                catalog.provider
            );

            for record in &catalog.records {
                match accumulator
                    .iter()
                    .position(|entry| self.detector.is_duplicate(entry, record))
                {
                    Some(index) => {
                        let merged = self.merger.merge(&accumulator[index], record);
                        accumulator[index] = merged;
                        metrics.merge_count += 1;
                    }
                    None => {
                        log::trace!("AGGREGATOR: Seeding '{}' ({})", record.name, record.id);
                        accumulator.push(self.seed(record));
                        metrics.seeded_count += 1;
                    }
                }
            }
        }

        sort_catalog(&mut accumulator);

        metrics.output_count = accumulator.len();
        metrics.duration = timer.elapsed();
        timer.finish_with_info(&format!("{} entries", accumulator.len()));
        LogContext::aggregation_summary(
            metrics.provider_count,
            metrics.input_count,
            metrics.merge_count,
            metrics.output_count,
        );
        log::debug!("\n{}", metrics.report());

        (accumulator, metrics)
    }

    /// First sighting of a title: a copy of the record with every derived
    /// field initialized from it alone
    pub fn seed(&self, record: &SeriesRecord) -> SeriesRecord {
        let prefix = record.provider_prefix();
        let mut seeded = record.clone();

        seeded.rating_breakdown =
            BTreeMap::from([(prefix.clone(), record.standalone_rating_entry())]);
        seeded.genres = without_studio(record.genres.clone(), record.studio.as_deref());
        seeded.providers = vec![prefix.clone()];
        seeded.provider_slugs = BTreeMap::from([(prefix, record.provider_slug())]);
        seeded.rating = Some(
            self.merger
                .rating_normalizer()
                .weighted_average(&seeded.rating_breakdown),
        );
        seeded.metadata_score = self.merger.quality_scorer().score(&seeded);

        seeded
    }
}

/// Final catalog order: metadata score desc, provider count desc, then name
pub fn sort_catalog(records: &mut [SeriesRecord]) {
    records.sort_by(|a, b| {
        b.metadata_score
            .cmp(&a.metadata_score)
            .then_with(|| b.provider_count().cmp(&a.provider_count()))
            .then_with(|| compare_names(&a.name, &b.name))
    });
}

/// Name order that ignores case and accents first ("Émile" sorts with "e"),
/// then breaks ties on accents, then on case
fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| a.cmp(b))
}

/// Lowercased, with diacritics folded away
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .collect()
}
