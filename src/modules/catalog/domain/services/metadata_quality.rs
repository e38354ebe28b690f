use crate::modules::catalog::domain::entities::SeriesRecord;

/// Highest score a record can reach
pub const MAX_METADATA_SCORE: u32 = 14;

/// Scores how complete a record's metadata is
///
/// | field       | points                                   |
/// |-------------|------------------------------------------|
/// | description | +3 over 20 chars, +1 over 100, +1 over 200 |
/// | genres      | one per genre, at most 5                 |
/// | poster      | +2 when longer than 10 chars             |
/// | year        | +1                                       |
/// | rating      | +1 when above 0                          |
///
/// Always computed from scratch; never patch a stored score.
#[derive(Debug, Clone, Copy, Default)]
pub struct MetadataQualityScorer;

impl MetadataQualityScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, record: &SeriesRecord) -> u32 {
        let mut score = 0;

        if let Some(description) = &record.description {
            let len = description.chars().count();
            if len > 20 {
                score += 3;
            }
            if len > 100 {
                score += 1;
            }
            if len > 200 {
                score += 1;
            }
        }

        score += record.genres.len().min(5) as u32;

        if record
            .poster
            .as_ref()
            .is_some_and(|poster| poster.chars().count() > 10)
        {
            score += 2;
        }

        if record.year.is_some() {
            score += 1;
        }

        if record.rating.is_some_and(|rating| rating > 0.0) {
            score += 1;
        }

        score
    }
}
