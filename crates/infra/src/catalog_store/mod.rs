//! Catalog Store: durable storage and filtered retrieval of products.

pub mod in_memory;
pub mod sqlite;

pub use in_memory::InMemoryCatalogStore;
pub use sqlite::SqliteCatalogStore;

use std::sync::Arc;

use thiserror::Error;

use catalog_products::{Filter, Product};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The store could not be opened, created, or seeded. Fatal at startup.
    #[error("catalog store bootstrap failed: {0}")]
    Bootstrap(String),

    /// A query against an open store failed.
    #[error("catalog query failed: {0}")]
    Query(String),

    /// A stored row could not be turned back into a product.
    #[error("invalid product row: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn bootstrap(msg: impl Into<String>) -> Self {
        Self::Bootstrap(msg.into())
    }

    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }
}

/// Read-only product collection, queryable by [`Filter`].
///
/// Implementations return products in their natural retrieval order
/// (insertion order) and never mutate state while querying, so a single
/// handle may be shared across concurrent requests.
#[async_trait::async_trait]
pub trait CatalogStore: Send + Sync {
    /// All products admitted by `filter`.
    async fn query(&self, filter: &Filter) -> Result<Vec<Product>, StoreError>;
}

#[async_trait::async_trait]
impl<S> CatalogStore for Arc<S>
where
    S: CatalogStore + ?Sized,
{
    async fn query(&self, filter: &Filter) -> Result<Vec<Product>, StoreError> {
        (**self).query(filter).await
    }
}
