//! Catalog service: request-level orchestration.
//!
//! Parses the loosely-typed filter, asks the store for matching products, and
//! prices each one. No state of its own; the only side effect is the store read.

use std::sync::Arc;

use thiserror::Error;

use catalog_infra::{CatalogConfig, CatalogStore, SqliteCatalogStore, StoreError};
use catalog_products::{
    Filter, FilterError, PricedProduct, PricingPolicy, PromotionalPricing, RawFilter,
};

use crate::app::dto::{PayloadFormatter, ResponseFormatter};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// Client-attributable: the filter could not be interpreted.
    #[error(transparent)]
    BadFilter(#[from] FilterError),

    /// Server-side: the store failed for this request.
    #[error(transparent)]
    Storage(#[from] StoreError),
}

#[derive(Debug, Clone)]
pub struct CatalogService<S, P = PromotionalPricing> {
    store: S,
    pricing: P,
}

impl<S, P> CatalogService<S, P>
where
    S: CatalogStore,
    P: PricingPolicy,
{
    pub fn new(store: S, pricing: P) -> Self {
        Self { store, pricing }
    }

    /// Priced products matching `raw`, in the store's retrieval order.
    pub async fn list_products(&self, raw: &RawFilter) -> Result<Vec<PricedProduct>, CatalogError> {
        let filter = Filter::from_raw(raw).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected catalog filter");
        })?;

        let products = self.store.query(&filter).await.inspect_err(|e| {
            tracing::error!(error = %e, "catalog query failed");
        })?;

        Ok(products
            .into_iter()
            .map(|product| self.pricing.apply(product))
            .collect())
    }
}

/// Everything the HTTP handlers need, shared behind an `Arc`.
pub struct AppServices {
    pub catalog: CatalogService<Arc<dyn CatalogStore>>,
    pub formatter: Box<dyn ResponseFormatter>,
}

impl AppServices {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            catalog: CatalogService::new(store, PromotionalPricing),
            formatter: Box::new(PayloadFormatter),
        }
    }
}

/// Bootstrap the SQLite store described by `config` and wire the services around it.
pub async fn build_services(config: &CatalogConfig) -> Result<AppServices, StoreError> {
    let store = SqliteCatalogStore::initialize_with(&config.db_path, config.recreate_db).await?;
    tracing::info!(path = %store.path().display(), "catalog store ready");
    Ok(AppServices::new(Arc::new(store)))
}
