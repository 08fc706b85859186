//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. They represent
/// concepts where identity doesn't matter - only the values matter. A tax
/// identifier made of the same digits is the same identifier, wherever it
/// came from.
///
/// ## Immutability
///
/// Once created, a value object doesn't change. To "modify" one, create a
/// new one with the new values. This keeps them safe to share across
/// threads and lets them behave like primitives (copied, compared, hashed).
///
/// ## Design Constraints
///
/// The trait requires:
/// - **Clone**: value objects are cheap to copy (they're values, not references)
/// - **PartialEq**: value objects are compared by their attribute values
/// - **Debug**: value objects should be debuggable (helpful for logging, testing)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
