//! Title matching: name canonicalization, edit-distance similarity and the
//! duplicate decision built on both.
pub mod name_normalizer;
pub mod similarity;

pub use name_normalizer::{
    normalize_name, LowercaseTransform, NameNormalizer, NameTransformation, RegexStripTransform,
    TrimTransform,
};
pub use similarity::{edit_distance, similarity, DuplicateDetector, DUPLICATE_THRESHOLD};
