use super::config::RatingConfig;
use crate::modules::catalog::domain::value_objects::{RatingEntry, RatingType};

/// Round to one decimal place
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn clamp_scale(value: f64) -> f64 {
    value.clamp(0.0, 10.0)
}

/// Converts heterogeneous provider ratings to a common 0-10 scale
///
/// `None` always means "no data" and is never coerced to 0. A 0 is a real
/// rating; a missing one must not count against a title.
#[derive(Debug, Clone, Default)]
pub struct RatingNormalizer {
    config: RatingConfig,
}

impl RatingNormalizer {
    pub fn new(config: RatingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    pub fn normalize_rating(&self, value: f64, rating_type: RatingType) -> Option<f64> {
        if !value.is_finite() {
            return None;
        }

        match rating_type {
            RatingType::Direct => Some(clamp_scale(value)),
            RatingType::Percentage => Some(clamp_scale(value / 10.0)),
            RatingType::Stars => Some(clamp_scale(value / 5.0 * 10.0)),
            RatingType::Trending => Some(clamp_scale(value).min(self.config.trending_cap)),
            RatingType::Views => self.normalize_view_count(value),
        }
    }

    /// Log-scaled score for a view count, capped below real user ratings
    pub fn normalize_view_count(&self, views: f64) -> Option<f64> {
        if !views.is_finite() || views < 0.0 || views < self.config.view_threshold {
            return None;
        }

        let score = (views + 1.0).log10() * self.config.view_log_multiplier;
        Some(round1(score.min(self.config.max_view_rating)))
    }

    /// Recompute an entry's 0-10 value from its raw value and type
    pub fn resolve(&self, entry: &RatingEntry) -> Option<f64> {
        self.normalize_rating(entry.raw, entry.rating_type)
    }

    /// Provider-weighted mean of every usable entry, rounded to one decimal
    ///
    /// Falls back to the configured default rating when nothing is usable.
    /// The result does not depend on iteration order beyond float rounding.
    pub fn weighted_average<'a, I>(&self, breakdown: I) -> f64
    where
        I: IntoIterator<Item = (&'a String, &'a Option<RatingEntry>)>,
    {
        let mut weighted_sum = 0.0;
        let mut total_weight = 0.0;

        for (provider, entry) in breakdown {
            let Some(entry) = entry else {
                continue;
            };
            let Some(normalized) = self.resolve(entry) else {
                log::trace!("Skipping unusable {} rating from {}", entry.rating_type, provider);
                continue;
            };

            let weight = self.config.weight_for(provider);
            weighted_sum += normalized * weight;
            total_weight += weight;
        }

        if total_weight == 0.0 {
            return self.config.default_rating;
        }

        round1(weighted_sum / total_weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::domain::services::rating::config::RatingConfigBuilder;
    use std::collections::BTreeMap;

    fn normalizer() -> RatingNormalizer {
        RatingNormalizer::default()
    }

    fn breakdown(entries: &[(&str, Option<RatingEntry>)]) -> BTreeMap<String, Option<RatingEntry>> {
        entries
            .iter()
            .map(|(p, e)| (p.to_string(), *e))
            .collect()
    }

    #[test]
    fn test_direct_is_clamped() {
        let n = normalizer();
        assert_eq!(n.normalize_rating(11.0, RatingType::Direct), Some(10.0));
        assert_eq!(n.normalize_rating(-1.0, RatingType::Direct), Some(0.0));
        assert_eq!(n.normalize_rating(8.6, RatingType::Direct), Some(8.6));
    }

    #[test]
    fn test_zero_is_a_real_rating() {
        assert_eq!(normalizer().normalize_rating(0.0, RatingType::Direct), Some(0.0));
    }

    #[test]
    fn test_percentage() {
        let n = normalizer();
        assert_eq!(n.normalize_rating(85.0, RatingType::Percentage), Some(8.5));
        assert_eq!(n.normalize_rating(150.0, RatingType::Percentage), Some(10.0));
    }

    #[test]
    fn test_stars() {
        let n = normalizer();
        assert_eq!(n.normalize_rating(4.0, RatingType::Stars), Some(8.0));
        assert_eq!(n.normalize_rating(5.0, RatingType::Stars), Some(10.0));
        assert_eq!(n.normalize_rating(6.0, RatingType::Stars), Some(10.0));
    }

    #[test]
    fn test_trending_is_capped() {
        let n = normalizer();
        assert_eq!(n.normalize_rating(9.0, RatingType::Trending), Some(7.5));
        assert_eq!(n.normalize_rating(5.0, RatingType::Trending), Some(5.0));
        assert_eq!(n.normalize_rating(-3.0, RatingType::Trending), Some(0.0));
    }

    #[test]
    fn test_nan_and_infinite_are_unrated() {
        let n = normalizer();
        for rating_type in [
            RatingType::Direct,
            RatingType::Percentage,
            RatingType::Stars,
            RatingType::Trending,
            RatingType::Views,
        ] {
            assert_eq!(n.normalize_rating(f64::NAN, rating_type), None);
            assert_eq!(n.normalize_rating(f64::INFINITY, rating_type), None);
        }
    }

    #[test]
    fn test_view_threshold() {
        let n = normalizer();
        assert_eq!(n.normalize_view_count(999.0), None);

        let at_threshold = n.normalize_view_count(1000.0).unwrap();
        assert!(at_threshold <= 7.0);
        assert_eq!(at_threshold, 4.5);
    }

    #[test]
    fn test_view_count_invalid_inputs() {
        let n = normalizer();
        assert_eq!(n.normalize_view_count(-5.0), None);
        assert_eq!(n.normalize_view_count(f64::NAN), None);
    }

    #[test]
    fn test_view_count_scale_and_cap() {
        let n = normalizer();
        assert_eq!(n.normalize_view_count(5000.0), Some(5.5));
        assert_eq!(n.normalize_view_count(100_000.0), Some(7.0));
        assert_eq!(n.normalize_view_count(1e12), Some(7.0));
    }

    #[test]
    fn test_view_threshold_is_configurable() {
        let n = RatingNormalizer::new(RatingConfigBuilder::new().view_threshold(10.0).build().unwrap());
        assert!(n.normalize_view_count(999.0).is_some());
        assert_eq!(n.normalize_view_count(9.0), None);
    }

    #[test]
    fn test_resolve_is_repeatable() {
        let n = normalizer();
        let entry = RatingEntry::views(5000.0);
        assert_eq!(n.resolve(&entry), n.resolve(&entry));
        assert_eq!(n.resolve(&entry), Some(5.5));
    }

    #[test]
    fn test_weighted_average_defaults() {
        let n = normalizer();
        assert_eq!(n.weighted_average(&breakdown(&[])), 6.0);
        assert_eq!(n.weighted_average(&breakdown(&[("hmm", None)])), 6.0);
    }

    #[test]
    fn test_weighted_average_skips_unusable_entries() {
        let n = normalizer();
        let b = breakdown(&[
            ("hse", Some(RatingEntry::views(10.0))),
            ("htv", None),
            ("hmm", Some(RatingEntry::direct(f64::NAN))),
        ]);
        assert_eq!(n.weighted_average(&b), 6.0);
    }

    #[test]
    fn test_weighted_average_weights_direct_provider() {
        let n = normalizer();
        let b = breakdown(&[
            ("hmm", Some(RatingEntry::direct(8.6))),
            ("hse", Some(RatingEntry::views(5000.0))),
        ]);
        // (8.6 * 5 + 5.5 * 1) / 6 = 8.083...
        assert_eq!(n.weighted_average(&b), 8.1);
    }

    #[test]
    fn test_weighted_average_single_entry() {
        let n = normalizer();
        let b = breakdown(&[("hmm", Some(RatingEntry::direct(8.6)))]);
        assert_eq!(n.weighted_average(&b), 8.6);
    }

    #[test]
    fn test_weighted_average_zero_rating_counts() {
        let n = normalizer();
        let b = breakdown(&[("hse", Some(RatingEntry::direct(0.0)))]);
        assert_eq!(n.weighted_average(&b), 0.0);
    }

    #[test]
    fn test_weighted_average_is_order_independent() {
        let n = normalizer();
        let entries = vec![
            ("hmm".to_string(), Some(RatingEntry::direct(7.3))),
            ("hse".to_string(), Some(RatingEntry::views(25_000.0))),
            ("htv".to_string(), Some(RatingEntry::new(3.5, RatingType::Stars))),
            ("hah".to_string(), Some(RatingEntry::new(8.0, RatingType::Trending))),
            ("oha".to_string(), None),
        ];
        let forward = n.weighted_average(entries.iter().map(|(k, v)| (k, v)));
        let backward = n.weighted_average(entries.iter().rev().map(|(k, v)| (k, v)));
        let rotated = n.weighted_average(
            entries
                .iter()
                .cycle()
                .skip(2)
                .take(entries.len())
                .map(|(k, v)| (k, v)),
        );
        assert_eq!(forward, backward);
        assert_eq!(forward, rotated);
    }

    #[test]
    fn test_zero_weight_provider_falls_back_to_default() {
        let n = RatingNormalizer::new(
            RatingConfigBuilder::new()
                .default_provider_weight(0.0)
                .clear_provider_weights()
                .build()
                .unwrap(),
        );
        let b = breakdown(&[("hse", Some(RatingEntry::direct(9.0)))]);
        assert_eq!(n.weighted_average(&b), 6.0);
    }
}
