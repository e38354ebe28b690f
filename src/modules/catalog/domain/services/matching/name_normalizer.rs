use regex::Regex;
use std::sync::LazyLock;

/// Transformation that can be applied to a series name
///
/// Each transformation is composable and testable in isolation.
pub trait NameTransformation: Send + Sync {
    fn transform(&self, name: &str) -> String;
    fn name(&self) -> &'static str;
}

/// Converts the name to lowercase
#[derive(Debug, Clone)]
pub struct LowercaseTransform;

impl NameTransformation for LowercaseTransform {
    fn transform(&self, name: &str) -> String {
        name.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "Lowercase"
    }
}

/// Removes a regex pattern from the name
#[derive(Debug, Clone)]
pub struct RegexStripTransform {
    label: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl RegexStripTransform {
    fn new(label: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            label,
            pattern: Regex::new(pattern).expect("valid name normalization pattern"),
            replacement,
        }
    }

    /// Drops everything but word characters, whitespace and hyphens
    pub fn symbols() -> Self {
        Self::new("StripSymbols", r"[^\w\s-]", "")
    }

    /// Collapses whitespace runs into a single space
    pub fn whitespace() -> Self {
        Self::new("CollapseWhitespace", r"\s+", " ")
    }

    /// Drops a leading English article
    pub fn leading_article() -> Self {
        Self::new("StripLeadingArticle", r"^\s*(?:the|a|an)\s+", "")
    }

    /// Drops a trailing episode/season marker such as "season 2" or "ep12"
    pub fn episode_marker() -> Self {
        Self::new(
            "StripEpisodeMarker",
            r"\b(?:episode|ep|series|season|s)\s*\d*\s*$",
            "",
        )
    }
}

impl NameTransformation for RegexStripTransform {
    fn transform(&self, name: &str) -> String {
        self.pattern.replace_all(name, self.replacement).into_owned()
    }

    fn name(&self) -> &'static str {
        self.label
    }
}

/// Trims surrounding whitespace
#[derive(Debug, Clone)]
pub struct TrimTransform;

impl NameTransformation for TrimTransform {
    fn transform(&self, name: &str) -> String {
        name.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "Trim"
    }
}

/// Canonicalizes series names for comparison, never for display
///
/// Applies its transformations in insertion order; the order matters.
pub struct NameNormalizer {
    transformations: Vec<Box<dyn NameTransformation>>,
}

impl NameNormalizer {
    /// Create a new empty normalizer
    pub fn new() -> Self {
        Self {
            transformations: Vec::new(),
        }
    }

    /// lowercase -> strip symbols -> collapse whitespace -> strip leading
    /// article -> strip trailing episode marker -> trim
    pub fn default_pipeline() -> Self {
        Self::new()
            .with(LowercaseTransform)
            .with(RegexStripTransform::symbols())
            .with(RegexStripTransform::whitespace())
            .with(RegexStripTransform::leading_article())
            .with(RegexStripTransform::episode_marker())
            .with(TrimTransform)
    }

    pub fn with(mut self, transformation: impl NameTransformation + 'static) -> Self {
        self.transformations.push(Box::new(transformation));
        self
    }

    pub fn normalize(&self, name: &str) -> String {
        let mut result = name.to_string();

        for transformation in &self.transformations {
            result = transformation.transform(&result);
            log::trace!("After {}: '{}'", transformation.name(), result);
        }

        result
    }

    pub fn transformation_count(&self) -> usize {
        self.transformations.len()
    }
}

impl Default for NameNormalizer {
    fn default() -> Self {
        Self::default_pipeline()
    }
}

static DEFAULT_NORMALIZER: LazyLock<NameNormalizer> = LazyLock::new(NameNormalizer::default_pipeline);

/// Normalize a name with the default pipeline; `None` normalizes to ""
pub fn normalize_name(name: Option<&str>) -> String {
    match name {
        Some(name) => DEFAULT_NORMALIZER.normalize(name),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(name: &str) -> String {
        normalize_name(Some(name))
    }

    #[test]
    fn test_lowercase_transform() {
        assert_eq!(LowercaseTransform.transform("Foo The ANIMATION"), "foo the animation");
    }

    #[test]
    fn test_strip_symbols_keeps_hyphens() {
        let transform = RegexStripTransform::symbols();
        assert_eq!(transform.transform("re:zero!"), "rezero");
        assert_eq!(transform.transform("k-on!"), "k-on");
        assert_eq!(transform.transform("jojo's_adventure"), "jojos_adventure");
    }

    #[test]
    fn test_collapse_whitespace() {
        let transform = RegexStripTransform::whitespace();
        assert_eq!(transform.transform("foo \t\n  bar"), "foo bar");
    }

    #[test]
    fn test_leading_article() {
        let transform = RegexStripTransform::leading_article();
        assert_eq!(transform.transform("the foo"), "foo");
        assert_eq!(transform.transform("a silent voice"), "silent voice");
        assert_eq!(transform.transform("an affair"), "affair");
        // Only whole leading words
        assert_eq!(transform.transform("theory of everything"), "theory of everything");
        assert_eq!(transform.transform("foo the bar"), "foo the bar");
    }

    #[test]
    fn test_episode_marker() {
        let transform = RegexStripTransform::episode_marker();
        assert_eq!(transform.transform("foo episode 3"), "foo ");
        assert_eq!(transform.transform("foo ep12"), "foo ");
        assert_eq!(transform.transform("foo season 2"), "foo ");
        assert_eq!(transform.transform("foo s2"), "foo ");
        assert_eq!(transform.transform("foo series"), "foo ");
        // A trailing "s" inside a word is not a marker
        assert_eq!(transform.transform("titans"), "titans");
        assert_eq!(transform.transform("foo seasons"), "foo seasons");
    }

    #[test]
    fn test_default_pipeline_order() {
        assert_eq!(NameNormalizer::default_pipeline().transformation_count(), 6);
        assert_eq!(normalize("The Foo: Season 2"), "foo");
        assert_eq!(normalize("  Foo   The  Animation  "), "foo the animation");
    }

    #[test]
    fn test_same_title_from_different_providers() {
        assert_eq!(normalize("Foo The Animation"), normalize("foo the animation"));
        assert_eq!(normalize("Foo - Episode 1"), "foo -");
        assert_eq!(normalize("The Foo Ep 4"), normalize("the foo"));
    }

    #[test]
    fn test_empty_and_missing_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize_name(None), "");
        assert_eq!(normalize("   "), "");
    }

    #[test]
    fn test_only_symbols() {
        assert_eq!(normalize("!!!???"), "");
    }

    #[test]
    fn test_unicode_titles_survive() {
        assert_eq!(normalize("進撃の巨人"), "進撃の巨人");
        assert_eq!(normalize("Pokémon"), "pokémon");
    }

    #[test]
    fn test_normalization_is_idempotent() {
        for title in ["The Foo: Season 2", "Overflow", "Kanojo x Kanojo x Kanojo"] {
            let once = normalize(title);
            assert_eq!(once, normalize(&once), "not idempotent for '{}'", title);
        }
    }

    #[test]
    fn test_empty_pipeline_is_identity() {
        let normalizer = NameNormalizer::new();
        assert_eq!(normalizer.normalize("  The Foo!  "), "  The Foo!  ");
        assert_eq!(normalizer.transformation_count(), 0);
    }
}
