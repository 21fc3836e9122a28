use catalog_core::{DomainError, DomainResult, Entity, Sku};

/// Catalog entry as persisted by the store.
///
/// Immutable once constructed; the catalog has no update path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    sku: Sku,
    name: String,
    category: String,
    price: i64, // List price in minor currency units (e.g. cents)
}

impl Product {
    pub fn new(
        sku: Sku,
        name: impl Into<String>,
        category: impl Into<String>,
        price: i64,
    ) -> DomainResult<Self> {
        if price < 0 {
            return Err(DomainError::validation(format!(
                "product {sku}: price must not be negative (got {price})"
            )));
        }

        Ok(Self {
            sku,
            name: name.into(),
            category: category.into(),
            price,
        })
    }

    pub fn sku(&self) -> &Sku {
        &self.sku
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn price(&self) -> i64 {
        self.price
    }
}

impl Entity for Product {
    type Id = Sku;

    fn id(&self) -> &Self::Id {
        &self.sku
    }
}
