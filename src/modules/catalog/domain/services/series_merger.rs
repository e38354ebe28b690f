use std::collections::BTreeMap;

use super::metadata_quality::MetadataQualityScorer;
use super::rating::RatingNormalizer;
use crate::modules::catalog::domain::entities::SeriesRecord;
use crate::modules::catalog::domain::value_objects::{RatingEntry, RatingType};

/// Which record leads a merge when both score the same
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryTieBreak {
    /// The record already in the catalog stays primary
    #[default]
    KeepExisting,
    /// A record carrying a direct user rating beats one that does not;
    /// otherwise the existing record stays primary
    PreferDirectRating,
}

/// Folds two records describing the same title into one
///
/// The richer record (by metadata score) becomes primary and supplies the
/// defaults; the other fills gaps. The result is a new record; neither input
/// is touched.
#[derive(Debug, Clone, Default)]
pub struct SeriesMerger {
    rating_normalizer: RatingNormalizer,
    quality_scorer: MetadataQualityScorer,
    tie_break: PrimaryTieBreak,
}

impl SeriesMerger {
    pub fn new(rating_normalizer: RatingNormalizer) -> Self {
        Self {
            rating_normalizer,
            quality_scorer: MetadataQualityScorer::new(),
            tie_break: PrimaryTieBreak::default(),
        }
    }

    pub fn with_tie_break(mut self, tie_break: PrimaryTieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    pub fn rating_normalizer(&self) -> &RatingNormalizer {
        &self.rating_normalizer
    }

    pub fn quality_scorer(&self) -> &MetadataQualityScorer {
        &self.quality_scorer
    }

    pub fn merge(&self, existing: &SeriesRecord, incoming: &SeriesRecord) -> SeriesRecord {
        let existing_breakdown = breakdown_with_own_entry(existing);
        let incoming_breakdown = breakdown_with_own_entry(incoming);

        let existing_score = self.quality_scorer.score(existing);
        let incoming_score = self.quality_scorer.score(incoming);

        let incoming_is_primary = match incoming_score.cmp(&existing_score) {
            std::cmp::Ordering::Greater => true,
            std::cmp::Ordering::Less => false,
            std::cmp::Ordering::Equal => match self.tie_break {
                PrimaryTieBreak::KeepExisting => false,
                PrimaryTieBreak::PreferDirectRating => {
                    has_direct_rating(&incoming_breakdown)
                        && !has_direct_rating(&existing_breakdown)
                }
            },
        };

        let (primary, secondary, primary_breakdown, secondary_breakdown) = if incoming_is_primary {
            (incoming, existing, incoming_breakdown, existing_breakdown)
        } else {
            (existing, incoming, existing_breakdown, incoming_breakdown)
        };

        log::debug!(
            "Merging '{}' ({}, score {}) into '{}' ({}, score {})",
            secondary.name,
            secondary.id,
            self.quality_scorer.score(secondary),
            primary.name,
            primary.id,
            self.quality_scorer.score(primary),
        );

        let mut merged = primary.clone();

        merged.providers = primary.effective_providers();
        for provider in secondary.effective_providers() {
            if !merged.providers.contains(&provider) {
                merged.providers.push(provider);
            }
        }

        merged.provider_slugs = primary.effective_provider_slugs();
        for (provider, slug) in secondary.effective_provider_slugs() {
            merged.provider_slugs.entry(provider).or_insert(slug);
        }

        // Primary wins on collisions
        let mut breakdown = secondary_breakdown;
        breakdown.extend(primary_breakdown);
        merged.rating = Some(self.rating_normalizer.weighted_average(&breakdown));
        merged.rating_breakdown = breakdown;

        merged.poster = present(&primary.poster)
            .or_else(|| present(&secondary.poster))
            .cloned();

        merged.description = match (present(&primary.description), present(&secondary.description)) {
            (Some(own), Some(other)) if other.chars().count() > own.chars().count() => {
                Some(other.clone())
            }
            (Some(own), _) => Some(own.clone()),
            (None, other) => other.cloned(),
        };

        merged.studio = match (present(&primary.studio), present(&secondary.studio)) {
            (Some(own), Some(other)) if is_all_caps(own) && !is_all_caps(other) => {
                Some(other.clone())
            }
            (Some(own), _) => Some(own.clone()),
            (None, other) => other.cloned(),
        };

        let mut genres: Vec<String> = Vec::new();
        for genre in primary.genres.iter().chain(secondary.genres.iter()) {
            if !genres.contains(genre) {
                genres.push(genre.clone());
            }
        }
        merged.genres = without_studio(genres, merged.studio.as_deref());

        merged.year = primary.year.or(secondary.year);
        merged.rating_type = primary.rating_type.or(secondary.rating_type);
        merged.view_count = primary.view_count.or(secondary.view_count);
        // None sorts before any timestamp
        merged.last_updated = primary.last_updated.max(secondary.last_updated);

        merged.metadata_score = self.quality_scorer.score(&merged);
        merged
    }
}

/// The record's breakdown plus, for a raw scraper record, an entry
/// synthesized from its standalone rating or view count
///
/// An aggregated record (non-empty `providers`) carries the weighted average
/// in `rating`; reading it back as a provider rating would count it twice.
pub(crate) fn breakdown_with_own_entry(record: &SeriesRecord) -> BTreeMap<String, Option<RatingEntry>> {
    let mut breakdown = record.rating_breakdown.clone();
    if !record.providers.is_empty() {
        return breakdown;
    }

    let prefix = record.provider_prefix();
    if !breakdown.contains_key(&prefix) {
        if let Some(entry) = record.standalone_rating_entry() {
            breakdown.insert(prefix, Some(entry));
        }
    }
    breakdown
}

/// Drop genres that are really the studio name (case-insensitive)
pub(crate) fn without_studio(genres: Vec<String>, studio: Option<&str>) -> Vec<String> {
    match studio {
        Some(studio) => {
            let studio = studio.to_lowercase();
            genres
                .into_iter()
                .filter(|genre| genre.to_lowercase() != studio)
                .collect()
        }
        None => genres,
    }
}

fn has_direct_rating(breakdown: &BTreeMap<String, Option<RatingEntry>>) -> bool {
    breakdown
        .values()
        .flatten()
        .any(|entry| entry.rating_type == RatingType::Direct)
}

fn present(value: &Option<String>) -> Option<&String> {
    value.as_ref().filter(|v| !v.trim().is_empty())
}

fn is_all_caps(value: &str) -> bool {
    value.chars().any(char::is_alphabetic) && value.to_uppercase() == value
}
