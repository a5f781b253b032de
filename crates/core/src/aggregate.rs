//! Aggregate root trait for in-memory domain models.

/// Aggregate root marker + minimal interface.
///
/// An aggregate root is the single entry point for mutating everything it
/// owns. In the billing domain a `Client` is the root; its invoices are only
/// changed through it.
pub trait AggregateRoot {
    /// Strongly-typed aggregate identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the aggregate identifier.
    fn id(&self) -> &Self::Id;

    /// Monotonically increasing version of the aggregate's state.
    ///
    /// Bumped once per successful (or partially committed) mutation, so two
    /// reads at the same version observe identical state.
    fn version(&self) -> u64;
}
