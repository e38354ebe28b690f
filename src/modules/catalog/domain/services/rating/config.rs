use std::collections::HashMap;

/// Configuration for rating normalization and weighting
///
/// Externalizes every threshold, cap and provider weight so the normalizer
/// carries no shared global state.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingConfig {
    /// View counts below this carry no rating signal
    pub view_threshold: f64,

    /// Multiplier applied to `log10(views + 1)`
    pub view_log_multiplier: f64,

    /// Highest score a view count can produce
    pub max_view_rating: f64,

    /// Highest score a trending position can produce
    pub trending_cap: f64,

    /// Rating reported when no provider contributed a usable value
    pub default_rating: f64,

    /// Weight of providers missing from `provider_weights`
    pub default_provider_weight: f64,

    /// Per-provider weight by prefix
    pub provider_weights: HashMap<String, f64>,
}

impl RatingConfig {
    /// Creates a new configuration with production defaults
    pub fn new() -> Self {
        Self {
            view_threshold: 1000.0,
            view_log_multiplier: 1.5,
            max_view_rating: 7.0,
            trending_cap: 7.5,
            default_rating: 6.0,
            default_provider_weight: 1.0,
            // hmm collects user ratings directly; everything else is a proxy
            provider_weights: HashMap::from([("hmm".to_string(), 5.0)]),
        }
    }

    pub fn weight_for(&self, provider: &str) -> f64 {
        self.provider_weights
            .get(provider)
            .copied()
            .unwrap_or(self.default_provider_weight)
    }

    /// Validates the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !self.view_threshold.is_finite() || self.view_threshold < 0.0 {
            return Err(format!(
                "view_threshold must be a non-negative number, got {}",
                self.view_threshold
            ));
        }

        if !self.view_log_multiplier.is_finite() || self.view_log_multiplier <= 0.0 {
            return Err(format!(
                "view_log_multiplier must be > 0, got {}",
                self.view_log_multiplier
            ));
        }

        for (label, value) in [
            ("max_view_rating", self.max_view_rating),
            ("trending_cap", self.trending_cap),
            ("default_rating", self.default_rating),
        ] {
            if !(0.0..=10.0).contains(&value) {
                return Err(format!("{} must be within 0-10, got {}", label, value));
            }
        }

        if !self.default_provider_weight.is_finite() || self.default_provider_weight < 0.0 {
            return Err("Provider weights must be non-negative".to_string());
        }

        if let Some((provider, weight)) = self
            .provider_weights
            .iter()
            .find(|(_, w)| !w.is_finite() || **w < 0.0)
        {
            return Err(format!(
                "Provider weights must be non-negative, got {} for '{}'",
                weight, provider
            ));
        }

        Ok(())
    }
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for RatingConfig
#[derive(Default)]
pub struct RatingConfigBuilder {
    config: RatingConfig,
}

impl RatingConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: RatingConfig::new(),
        }
    }

    pub fn view_threshold(mut self, threshold: f64) -> Self {
        self.config.view_threshold = threshold;
        self
    }

    pub fn view_log_multiplier(mut self, multiplier: f64) -> Self {
        self.config.view_log_multiplier = multiplier;
        self
    }

    pub fn max_view_rating(mut self, cap: f64) -> Self {
        self.config.max_view_rating = cap;
        self
    }

    pub fn trending_cap(mut self, cap: f64) -> Self {
        self.config.trending_cap = cap;
        self
    }

    pub fn default_rating(mut self, rating: f64) -> Self {
        self.config.default_rating = rating;
        self
    }

    pub fn default_provider_weight(mut self, weight: f64) -> Self {
        self.config.default_provider_weight = weight;
        self
    }

    pub fn provider_weight(mut self, provider: impl Into<String>, weight: f64) -> Self {
        self.config.provider_weights.insert(provider.into(), weight);
        self
    }

    pub fn clear_provider_weights(mut self) -> Self {
        self.config.provider_weights.clear();
        self
    }

    pub fn build(self) -> Result<RatingConfig, String> {
        self.config.validate()?;
        Ok(self.config)
    }
}
