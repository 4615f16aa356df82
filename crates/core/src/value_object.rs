//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value** - they have no
/// identity of their own. Two `TileSize("600x1200")` values are the same
/// size; there is no "this" 600x1200 as opposed to "that" one. To "modify" a
/// value object, construct a new one.
///
/// The trait requires:
/// - **Clone**: values are cheap to copy around
/// - **PartialEq**: compared by attribute values
/// - **Debug**: debuggable (logging, test assertions)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
