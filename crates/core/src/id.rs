//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use crate::error::DomainError;

/// Stock keeping unit: the catalog-wide primary key of a product.
///
/// Always non-empty. Uniqueness across the collection is enforced by the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Sku(String);

impl Sku {
    pub fn parse(value: impl Into<String>) -> Result<Self, DomainError> {
        let value = value.into();
        if value.is_empty() {
            return Err(DomainError::invalid_id("Sku: must not be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Sku {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sku_is_rejected() {
        assert!(matches!(Sku::parse(""), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn sku_keeps_leading_zeros() {
        let sku: Sku = "000003".parse().unwrap();
        assert_eq!(sku.as_str(), "000003");
        assert_eq!(sku.to_string(), "000003");
    }
}
