use strsim::levenshtein;

use super::name_normalizer::normalize_name;
use crate::modules::catalog::domain::entities::SeriesRecord;

/// Minimum similarity for two normalized names to count as the same title
pub const DUPLICATE_THRESHOLD: f64 = 0.90;

/// Levenshtein distance in characters (insert, delete and substitute all cost 1)
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}

/// `(maxLen - editDistance) / maxLen` over characters, 1.0 for two empty strings
///
/// Compares the inputs as given; normalizing them is the caller's job.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b);
    (max_len - distance) as f64 / max_len as f64
}

/// Decides whether two records describe the same title
#[derive(Debug, Clone, Copy, Default)]
pub struct DuplicateDetector;

impl DuplicateDetector {
    pub fn new() -> Self {
        Self
    }

    pub fn is_duplicate(&self, a: &SeriesRecord, b: &SeriesRecord) -> bool {
        self.is_duplicate_name(&a.name, &b.name)
    }

    pub fn is_duplicate_name(&self, a: &str, b: &str) -> bool {
        let left = normalize_name(Some(a));
        let right = normalize_name(Some(b));

        if left == right {
            log::trace!("Exact normalized match: '{}'", left);
            return true;
        }

        let score = similarity(&left, &right);
        log::trace!("Similarity '{}' vs '{}': {:.3}", left, right, score);
        score >= DUPLICATE_THRESHOLD
    }
}
