pub mod memory_cache;

pub use memory_cache::MemoryCatalogCache;
