use regex::Regex;
use std::sync::LazyLock;

/// Prefix used when an id carries no recognizable provider prefix
pub const UNKNOWN_PROVIDER: &str = "unknown";

static PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z]+)-").expect("valid provider prefix pattern"));

/// Extract the provider prefix from a record id (`hmm-foo` -> `hmm`)
pub fn provider_prefix(id: &str) -> String {
    PREFIX_PATTERN
        .captures(id)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| UNKNOWN_PROVIDER.to_string())
}

/// The provider's own slug, i.e. the id without its prefix
pub fn provider_slug(id: &str) -> String {
    match PREFIX_PATTERN.find(id) {
        Some(m) => id[m.end()..].to_string(),
        None => id.to_string(),
    }
}
