//! Value object trait: equality by value, not identity.
//!
//! Inventory rows have no identity of their own (a row is addressed only by its
//! current position), so everything the domain passes around is a value object.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**: two rows with the
/// same name, quantity and price are equal, and the store allows both.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Money {
///     minor_units: u64,
/// }
///
/// impl ValueObject for Money {}
///
/// assert_eq!(Money { minor_units: 250 }, Money { minor_units: 250 });
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
