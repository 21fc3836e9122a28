use std::collections::HashSet;

use catalog_products::{Filter, Product, SEED_PRODUCTS};

use super::{CatalogStore, StoreError};

/// In-memory catalog for tests/dev.
///
/// Applies the same filter semantics as the SQLite store, in Rust.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalogStore {
    products: Vec<Product>,
}

impl InMemoryCatalogStore {
    /// Build a store from products in insertion order. SKUs must be unique.
    pub fn new(products: Vec<Product>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.sku().clone()) {
                return Err(StoreError::bootstrap(format!(
                    "duplicate sku {}",
                    product.sku()
                )));
            }
        }
        Ok(Self { products })
    }

    /// Store holding the compiled-in seed catalog.
    pub fn seeded() -> Result<Self, StoreError> {
        let products = SEED_PRODUCTS
            .iter()
            .map(|row| row.to_product())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| StoreError::bootstrap(e.to_string()))?;
        Self::new(products)
    }
}

#[async_trait::async_trait]
impl CatalogStore for InMemoryCatalogStore {
    async fn query(&self, filter: &Filter) -> Result<Vec<Product>, StoreError> {
        Ok(self
            .products
            .iter()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect())
    }
}
