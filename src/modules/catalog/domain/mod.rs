pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::*;
pub use services::{CatalogAggregator, SeriesMerger};
pub use value_objects::{RatingEntry, RatingType};
