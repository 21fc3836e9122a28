//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity**; they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A computed price
/// (`final: 7000, discount: "30%", currency: "EUR"`) is a value object; a catalog
/// product keyed by its SKU is an entity.
///
/// The trait requires:
/// - **Clone**: value objects are values, not references
/// - **PartialEq**: compared by their attribute values
/// - **Debug**: helpful for logging and testing
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     amount: i64,
///     currency: &'static str,
/// }
///
/// impl ValueObject for Money {}
///
/// let m1 = Money { amount: 100, currency: "EUR" };
/// let m2 = Money { amount: 100, currency: "EUR" };
/// assert_eq!(m1, m2);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
