use std::time::Duration;

/// Counters collected during one aggregation run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregationMetrics {
    /// Total duration of the run
    pub duration: Duration,

    /// Number of provider catalogs consumed
    pub provider_count: usize,

    /// Number of records across all catalogs
    pub input_count: usize,

    /// Records that started a new catalog entry
    pub seeded_count: usize,

    /// Records folded into an existing entry
    pub merge_count: usize,

    /// Entries in the final catalog
    pub output_count: usize,
}

impl AggregationMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Percentage of input records absorbed as duplicates
    pub fn deduplication_rate(&self) -> f32 {
        if self.input_count == 0 {
            return 0.0;
        }

        (self.merge_count as f32 / self.input_count as f32) * 100.0
    }

    /// Seeds and merges account for every input record
    pub fn is_consistent(&self) -> bool {
        self.seeded_count + self.merge_count == self.input_count
            && self.seeded_count == self.output_count
    }

    /// Generate a human-readable report
    pub fn report(&self) -> String {
        [
            "=== Aggregation Metrics ===".to_string(),
            format!("Total Duration: {}ms", self.duration.as_millis()),
            format!("Providers: {}", self.provider_count),
            format!("Input Count: {}", self.input_count),
            format!("Seeded: {}", self.seeded_count),
            format!(
                "Merged: {} ({:.1}%)",
                self.merge_count,
                self.deduplication_rate()
            ),
            format!("Output Count: {}", self.output_count),
        ]
        .join("\n")
    }
}
