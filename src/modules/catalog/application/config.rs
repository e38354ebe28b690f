use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

pub const ENV_CACHE_TTL_SECS: &str = "CATALOG_CACHE_TTL_SECS";
pub const ENV_EMPTY_CACHE_TTL_SECS: &str = "CATALOG_EMPTY_CACHE_TTL_SECS";
pub const ENV_FETCH_TIMEOUT_SECS: &str = "CATALOG_FETCH_TIMEOUT_SECS";
pub const ENV_MAX_RECORDS_PER_PROVIDER: &str = "CATALOG_MAX_RECORDS_PER_PROVIDER";

/// Settings for the fetch -> aggregate -> cache cycle
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogServiceConfig {
    /// How long an aggregated catalog stays cached
    pub cache_ttl: Duration,

    /// Shorter TTL for catalogs that came back empty
    pub empty_cache_ttl: Duration,

    /// Per-provider fetch budget; a provider that exceeds it contributes nothing
    pub fetch_timeout: Duration,

    /// Cap on records taken from one provider (aggregation is quadratic)
    pub max_records_per_provider: usize,
}

impl CatalogServiceConfig {
    pub fn new() -> Self {
        Self {
            cache_ttl: Duration::from_secs(30 * 60),
            empty_cache_ttl: Duration::from_secs(2 * 60),
            fetch_timeout: Duration::from_secs(20),
            max_records_per_provider: 500,
        }
    }

    /// Defaults overridden by `CATALOG_*` environment variables (and `.env`)
    ///
    /// This is what a host process calls at startup; `from_lookup` is the
    /// same parsing over an arbitrary variable source.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(secs) = parse_var(&lookup, ENV_CACHE_TTL_SECS)? {
            config.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var(&lookup, ENV_EMPTY_CACHE_TTL_SECS)? {
            config.empty_cache_ttl = Duration::from_secs(secs);
        }
        if let Some(secs) = parse_var(&lookup, ENV_FETCH_TIMEOUT_SECS)? {
            config.fetch_timeout = Duration::from_secs(secs);
        }
        if let Some(max) = parse_var(&lookup, ENV_MAX_RECORDS_PER_PROVIDER)? {
            config.max_records_per_provider = usize::try_from(max).map_err(|e| {
                AppError::ValidationError(format!("{}: {}", ENV_MAX_RECORDS_PER_PROVIDER, e))
            })?;
        }

        config.validate().map_err(AppError::ValidationError)?;
        Ok(config)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.cache_ttl.is_zero() {
            return Err("cache_ttl must be > 0".to_string());
        }

        if self.empty_cache_ttl > self.cache_ttl {
            return Err(format!(
                "empty_cache_ttl ({:?}) cannot exceed cache_ttl ({:?})",
                self.empty_cache_ttl, self.cache_ttl
            ));
        }

        if self.fetch_timeout.is_zero() {
            return Err("fetch_timeout must be > 0".to_string());
        }

        if self.max_records_per_provider == 0 {
            return Err("max_records_per_provider must be > 0".to_string());
        }

        Ok(())
    }
}

impl Default for CatalogServiceConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<F>(lookup: &F, key: &str) -> AppResult<Option<u64>>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| AppError::ValidationError(format!("{}: {}", key, e))),
        _ => Ok(None),
    }
}
