//! Entity trait: identity that survives state changes.

/// Entity marker + minimal interface.
///
/// Invoices and payments are entities: an invoice stays the same invoice
/// while allocations are appended to it.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
