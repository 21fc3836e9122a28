//! Compiled-in initial catalog, inserted when a store is bootstrapped from scratch.

use catalog_core::{DomainResult, Sku};

use crate::product::Product;

/// Static product row used to seed a fresh store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProduct {
    pub sku: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub price: i64,
}

impl SeedProduct {
    pub fn to_product(&self) -> DomainResult<Product> {
        Product::new(Sku::parse(self.sku)?, self.name, self.category, self.price)
    }
}

/// Initial product set, in insertion order.
pub const SEED_PRODUCTS: &[SeedProduct] = &[
    SeedProduct {
        sku: "000001",
        name: "BV Lean leather ankle boots",
        category: "boots",
        price: 89000,
    },
    SeedProduct {
        sku: "000002",
        name: "BV Lean leather ankle boots",
        category: "boots",
        price: 99000,
    },
    SeedProduct {
        sku: "000003",
        name: "Ashlington leather ankle boots",
        category: "boots",
        price: 71000,
    },
    SeedProduct {
        sku: "000004",
        name: "Naima embellished suede sandals",
        category: "sandals",
        price: 79500,
    },
    SeedProduct {
        sku: "000005",
        name: "Nathane leather sneakers",
        category: "sneakers",
        price: 59000,
    },
];
