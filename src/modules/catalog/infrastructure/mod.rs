pub mod cache;

pub use cache::MemoryCatalogCache;
