//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. A payment
/// allocation is one: once recorded, "50 of payment P against invoice I" never
/// changes, and two records with the same fields are interchangeable. That is
/// what lets the same allocation be stored on both the invoice and the payment
/// without either side owning it.
///
/// ```ignore
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Contribution {
///     amount: i64,
/// }
///
/// impl ValueObject for Contribution {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
