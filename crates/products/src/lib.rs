//! Catalog domain module.
//!
//! This crate contains the business rules of the product catalog: the product
//! entity, filter parsing and matching, and the promotional pricing policy. It is
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod filter;
pub mod pricing;
pub mod product;
pub mod seed;

pub use filter::{CATEGORY_PARAM, Filter, FilterError, PRICE_LESS_THAN_PARAM, PriceBound, RawFilter};
pub use pricing::{CURRENCY, PricedProduct, PricingPolicy, PricingResult, PromotionalPricing};
pub use product::Product;
pub use seed::{SEED_PRODUCTS, SeedProduct};
