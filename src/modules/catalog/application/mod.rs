pub mod config;
pub mod service;

pub use config::CatalogServiceConfig;
pub use service::CatalogService;
