//! Catalog filters: loosely-typed request input and its validated form.

use thiserror::Error;

use crate::product::Product;

/// Query parameter carrying the exact-match category constraint.
pub const CATEGORY_PARAM: &str = "category";
/// Query parameter carrying the upper price bound (minor units).
pub const PRICE_LESS_THAN_PARAM: &str = "priceLessThan";

/// Filter input exactly as received at the boundary (query string values).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawFilter {
    pub category: Option<String>,
    pub price_less_than: Option<String>,
}

impl RawFilter {
    /// Build from key/value pairs; unknown keys are ignored and the first
    /// occurrence of a key wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                CATEGORY_PARAM => &mut raw.category,
                PRICE_LESS_THAN_PARAM => &mut raw.price_less_than,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        raw
    }
}

/// A filter value could not be interpreted.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("priceLessThan must be an integer amount in minor units, got {value:?}")]
    InvalidMaxPrice { value: String },
}

/// Price constraint implied by a filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceBound {
    /// `price <= bound`
    AtMost(i64),
    /// `price < bound`
    Below(i64),
}

impl PriceBound {
    pub fn admits(&self, price: i64) -> bool {
        match *self {
            PriceBound::AtMost(bound) => price <= bound,
            PriceBound::Below(bound) => price < bound,
        }
    }
}

/// Validated catalog filter. `None` means no constraint on that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    pub category: Option<String>,
    pub max_price: Option<i64>,
}

impl Filter {
    /// Filter that matches every product.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: &RawFilter) -> Result<Self, FilterError> {
        let category = non_empty(raw.category.as_deref()).map(str::to_owned);

        let max_price = match non_empty(raw.price_less_than.as_deref()) {
            Some(value) => Some(value.parse::<i64>().map_err(|_| FilterError::InvalidMaxPrice {
                value: value.to_owned(),
            })?),
            None => None,
        };

        Ok(Self {
            category,
            max_price,
        })
    }

    /// Price bound for this filter.
    ///
    /// The bound is inclusive on its own but strict when combined with a
    /// category constraint.
    pub fn price_bound(&self) -> Option<PriceBound> {
        let max = self.max_price?;
        Some(if self.category.is_some() {
            PriceBound::Below(max)
        } else {
            PriceBound::AtMost(max)
        })
    }

    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category() != category.as_str() {
                return false;
            }
        }

        self.price_bound()
            .map_or(true, |bound| bound.admits(product.price()))
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::Sku;

    fn product(category: &str, price: i64) -> Product {
        Product::new(Sku::parse("T-1").unwrap(), "Test", category, price).unwrap()
    }

    fn raw(category: Option<&str>, price: Option<&str>) -> RawFilter {
        RawFilter {
            category: category.map(str::to_owned),
            price_less_than: price.map(str::to_owned),
        }
    }

    #[test]
    fn empty_values_mean_absent() {
        let filter = Filter::from_raw(&raw(Some(""), Some(""))).unwrap();
        assert_eq!(filter, Filter::all());
    }

    #[test]
    fn non_numeric_price_is_rejected() {
        let err = Filter::from_raw(&raw(None, Some("cheap"))).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvalidMaxPrice {
                value: "cheap".to_string()
            }
        );
    }

    #[test]
    fn sql_like_category_is_plain_data() {
        let filter = Filter::from_raw(&raw(Some("boots\" OR 1=1 --"), None)).unwrap();
        assert_eq!(filter.category.as_deref(), Some("boots\" OR 1=1 --"));
        assert!(!filter.matches(&product("boots", 100)));
    }

    #[test]
    fn max_price_alone_is_inclusive() {
        let filter = Filter::from_raw(&raw(None, Some("70000"))).unwrap();
        assert_eq!(filter.price_bound(), Some(PriceBound::AtMost(70000)));
        assert!(filter.matches(&product("sneakers", 70000)));
        assert!(!filter.matches(&product("sneakers", 70001)));
    }

    #[test]
    fn max_price_with_category_is_strict() {
        let filter = Filter::from_raw(&raw(Some("boots"), Some("89000"))).unwrap();
        assert_eq!(filter.price_bound(), Some(PriceBound::Below(89000)));
        assert!(!filter.matches(&product("boots", 89000)));
        assert!(filter.matches(&product("boots", 88999)));
        assert!(!filter.matches(&product("sandals", 100)));
    }

    #[test]
    fn category_alone_is_exact_match() {
        let filter = Filter::from_raw(&raw(Some("boots"), None)).unwrap();
        assert!(filter.matches(&product("boots", 1_000_000)));
        assert!(!filter.matches(&product("Boots", 1)));
    }

    #[test]
    fn from_pairs_keeps_first_value_and_ignores_unknown_keys() {
        let raw = RawFilter::from_pairs([
            ("priceLessThan", "500"),
            ("colour", "red"),
            ("priceLessThan", "900"),
        ]);
        assert_eq!(raw.price_less_than.as_deref(), Some("500"));
        assert_eq!(raw.category, None);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: with no constraints every product matches.
            #[test]
            fn unconstrained_filter_matches_everything(
                category in "[a-z]{1,12}",
                price in 0i64..10_000_000
            ) {
                prop_assert!(Filter::all().matches(&product(&category, price)));
            }

            /// Property: combined filters never admit a product priced at the bound.
            #[test]
            fn combined_bound_is_strict(
                category in "[a-z]{1,12}",
                max in 0i64..10_000_000
            ) {
                let filter = Filter { category: Some(category.clone()), max_price: Some(max) };
                prop_assert!(!filter.matches(&product(&category, max)));
            }
        }
    }
}
