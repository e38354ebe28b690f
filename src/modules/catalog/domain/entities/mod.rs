pub mod series_record;

pub use series_record::{ProviderCatalog, SeriesRecord};
