//! Promotional pricing policy.
//!
//! Every product maps to exactly one [`PricingResult`]; the policy never fails and
//! holds no state. Rules are compiled in and evaluated in order, first match wins,
//! so SKU-specific promotions take precedence over category-wide ones.

use catalog_core::ValueObject;

use crate::product::Product;

/// Currency label attached to every computed price.
pub const CURRENCY: &str = "EUR";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Criterion {
    Sku(&'static str),
    Category(&'static str),
}

impl Criterion {
    fn matches(&self, product: &Product) -> bool {
        match *self {
            Criterion::Sku(sku) => product.sku().as_str() == sku,
            Criterion::Category(category) => product.category() == category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Promotion {
    criterion: Criterion,
    label: &'static str,
    multiplier: f64,
}

impl Promotion {
    /// Applies the multiplier in floating point and truncates toward zero.
    fn final_price(&self, price: i64) -> i64 {
        (price as f64 * self.multiplier) as i64
    }
}

const PROMOTIONS: &[Promotion] = &[
    Promotion {
        criterion: Criterion::Sku("000003"),
        label: "15%",
        multiplier: 0.7,
    },
    Promotion {
        criterion: Criterion::Category("boots"),
        label: "30%",
        multiplier: 0.7,
    },
];

/// Outcome of pricing a single product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingResult {
    pub final_price: i64,
    pub discount: Option<&'static str>,
    pub currency: &'static str,
}

impl ValueObject for PricingResult {}

/// A product together with its computed price. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricedProduct {
    pub product: Product,
    pub pricing: PricingResult,
}

/// Maps a product to its promotional outcome.
pub trait PricingPolicy: Send + Sync {
    fn price(&self, product: &Product) -> PricingResult;

    fn apply(&self, product: Product) -> PricedProduct {
        let pricing = self.price(&product);
        PricedProduct { product, pricing }
    }
}

/// The compiled-in promotion table.
#[derive(Debug, Clone, Copy, Default)]
pub struct PromotionalPricing;

impl PricingPolicy for PromotionalPricing {
    fn price(&self, product: &Product) -> PricingResult {
        match PROMOTIONS.iter().find(|p| p.criterion.matches(product)) {
            Some(promotion) => PricingResult {
                final_price: promotion.final_price(product.price()),
                discount: Some(promotion.label),
                currency: CURRENCY,
            },
            None => PricingResult {
                final_price: product.price(),
                discount: None,
                currency: CURRENCY,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Sku;

    fn product(sku: &str, category: &str, price: i64) -> Product {
        Product::new(Sku::parse(sku).unwrap(), "Test", category, price).unwrap()
    }

    #[test]
    fn boots_get_thirty_percent_label() {
        let result = PromotionalPricing.price(&product("000001", "boots", 10000));
        assert_eq!(result.final_price, 7000);
        assert_eq!(result.discount, Some("30%"));
        assert_eq!(result.currency, "EUR");
    }

    #[test]
    fn promoted_sku_wins_regardless_of_category() {
        let sandals = PromotionalPricing.price(&product("000003", "sandals", 10000));
        assert_eq!(sandals.final_price, 7000);
        assert_eq!(sandals.discount, Some("15%"));

        let boots = PromotionalPricing.price(&product("000003", "boots", 10000));
        assert_eq!(boots.discount, Some("15%"));
    }

    #[test]
    fn unmatched_product_keeps_list_price() {
        let result = PromotionalPricing.price(&product("000004", "sandals", 79500));
        assert_eq!(result.final_price, 79500);
        assert_eq!(result.discount, None);
        assert_eq!(result.currency, "EUR");
    }

    #[test]
    fn multiplier_truncates_floating_point_shortfall() {
        // 89000 * 0.7 is 62299.99999999999 in binary floating point.
        let result = PromotionalPricing.price(&product("000001", "boots", 89000));
        assert_eq!(result.final_price, 62299);

        let result = PromotionalPricing.price(&product("000002", "boots", 99000));
        assert_eq!(result.final_price, 69300);

        let result = PromotionalPricing.price(&product("000003", "boots", 71000));
        assert_eq!(result.final_price, 49700);
    }

    #[test]
    fn apply_keeps_the_product() {
        let p = product("000005", "sneakers", 59000);
        let priced = PromotionalPricing.apply(p.clone());
        assert_eq!(priced.product, p);
        assert_eq!(priced.pricing.final_price, 59000);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: pricing is deterministic.
            #[test]
            fn pricing_is_deterministic(
                sku in "[0-9]{6}",
                category in prop_oneof![Just("boots".to_string()), "[a-z]{1,10}"],
                price in 0i64..100_000_000
            ) {
                let p = product(&sku, &category, price);
                prop_assert_eq!(PromotionalPricing.price(&p), PromotionalPricing.price(&p));
            }

            /// Property: promotions never raise a price.
            #[test]
            fn final_price_never_exceeds_list_price(
                sku in "[0-9]{6}",
                category in "[a-z]{1,10}",
                price in 0i64..100_000_000
            ) {
                let p = product(&sku, &category, price);
                let result = PromotionalPricing.price(&p);
                prop_assert!(result.final_price <= price);
                prop_assert!(result.final_price >= 0);
                prop_assert_eq!(result.discount.is_some(), sku == "000003" || category == "boots");
            }
        }
    }
}
