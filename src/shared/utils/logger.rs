use log::{debug, info, warn};
use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the logging system
/// Safe to call more than once; only the first call installs the logger
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info) // Default level
            .filter_module("series_catalog", log::LevelFilter::Debug)
            .filter_module("tokio", log::LevelFilter::Warn) // Reduce tokio noise
            .format_timestamp_secs()
            .format_target(false)
            .format_module_path(false)
            .is_test(cfg!(test))
            .try_init();

        info!("Logging system initialized");
    });
}

/// Structured logging helpers for common patterns
pub struct LogContext;

impl LogContext {
    /// Log a provider catalog fetch
    pub fn provider_fetch(provider: &str, catalog_key: &str, records: Option<usize>) {
        match records {
            Some(count) => info!(
                "Fetch: {} returned {} records for '{}'",
                provider, count, catalog_key
            ),
            None => debug!("Fetch: Starting {} for '{}'", provider, catalog_key),
        }
    }

    /// Log a provider that contributed nothing because it failed
    pub fn provider_failure(provider: &str, catalog_key: &str, reason: &str) {
        warn!(
            "Fetch: {} failed for '{}', contributing zero records: {}",
            provider, catalog_key, reason
        );
    }

    /// Log the outcome of an aggregation run
    pub fn aggregation_summary(providers: usize, input: usize, merged: usize, output: usize) {
        info!(
            "Aggregate: {} records from {} providers -> {} entries ({} merges)",
            input, providers, output, merged
        );
    }

    /// Log performance metrics
    pub fn performance_metric(operation: &str, duration_ms: u64, additional_info: Option<&str>) {
        match additional_info {
            Some(info) => info!(
                "Performance: {} took {}ms ({})",
                operation, duration_ms, info
            ),
            None => info!("Performance: {} took {}ms", operation, duration_ms),
        }
    }
}

/// Helper for timing operations
pub struct TimedOperation {
    start: std::time::Instant,
    operation: String,
}

impl TimedOperation {
    pub fn new(operation: &str) -> Self {
        debug!("Starting: {}", operation);
        Self {
            start: std::time::Instant::now(),
            operation: operation.to_string(),
        }
    }

    pub fn elapsed(&self) -> std::time::Duration {
        self.start.elapsed()
    }

    pub fn finish(self) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, None);
        duration
    }

    pub fn finish_with_info(self, info: &str) -> u64 {
        let duration = self.start.elapsed().as_millis() as u64;
        LogContext::performance_metric(&self.operation, duration, Some(info));
        duration
    }
}
