//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values.
/// The per-variant product attributes (expiry date, warranty period) are value
/// objects: they are fixed when a product is created and replaced wholesale,
/// never edited in place.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct WarrantyPeriod(i64);
///
/// impl ValueObject for WarrantyPeriod {}
///
/// assert_eq!(WarrantyPeriod(12), WarrantyPeriod(12));
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
