use serde::{Deserialize, Serialize};

use catalog_products::PricedProduct;

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductsPayload {
    pub products: Vec<ProductPayload>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPayload {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: PricePayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PricePayload {
    pub original: i64,
    #[serde(rename = "final")]
    pub final_price: i64,
    /// Serialized as `null` when no promotion applies.
    pub discount: Option<String>,
    pub currency: String,
}

// -------------------------
// Formatting
// -------------------------

/// Turns priced products into the wire payload.
pub trait ResponseFormatter: Send + Sync {
    fn format_response(&self, products: &[PricedProduct]) -> ProductsPayload;
}

/// Default formatter: one entry per product, order preserved.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayloadFormatter;

impl ResponseFormatter for PayloadFormatter {
    fn format_response(&self, products: &[PricedProduct]) -> ProductsPayload {
        ProductsPayload {
            products: products.iter().map(product_to_payload).collect(),
        }
    }
}

pub fn product_to_payload(priced: &PricedProduct) -> ProductPayload {
    let PricedProduct { product, pricing } = priced;
    ProductPayload {
        sku: product.sku().to_string(),
        name: product.name().to_string(),
        category: product.category().to_string(),
        price: PricePayload {
            original: product.price(),
            final_price: pricing.final_price,
            discount: pricing.discount.map(str::to_owned),
            currency: pricing.currency.to_string(),
        },
    }
}
