//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity; two instances with the same attribute
/// values are interchangeable. They are built once and handed around by
/// value (e.g. a computed dashboard summary).
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
