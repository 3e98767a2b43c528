//! Value object trait: equality by value, not identity.
//!
//! Value objects have **no identity**; they are defined entirely by their
//! attribute values. Commands and read DTOs in the catalog are value objects:
//! two `CreateProduct` commands with the same fields are equal, and so are two
//! `ProductDto` snapshots with the same fields.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (same values means equal)
/// - **Entity**: has identity (same ID means the same entity)
///
/// Example:
/// - `CreateProduct { name: "Widget", price: 9.99, stock: 10, category_id: 3 }` is a value object
/// - `Product { id: Some(42), .. }` is an entity
///
/// Value objects are immutable once built. To "modify" one, build a new one.
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, Eq)]
/// struct Dimensions {
///     width_mm: u32,
///     height_mm: u32,
/// }
///
/// impl ValueObject for Dimensions {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
