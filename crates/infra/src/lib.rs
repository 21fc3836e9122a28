//! Infrastructure layer: catalog storage and configuration.

pub mod catalog_store;
pub mod config;

pub use catalog_store::{CatalogStore, InMemoryCatalogStore, SqliteCatalogStore, StoreError};
pub use config::CatalogConfig;
