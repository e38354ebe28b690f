//! Rating normalization: heterogeneous provider scores onto one 0-10 scale
//! and a provider-weighted average over a record's rating breakdown.
pub mod config;
pub mod normalizer;

pub use config::{RatingConfig, RatingConfigBuilder};
pub use normalizer::RatingNormalizer;
