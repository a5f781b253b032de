//! Tracing and logging setup shared by hosts of the receivables crates.
//!
//! The domain crates only emit `tracing` events; installing a subscriber is
//! left to whoever embeds them.

/// Tracing configuration (filters, formatting).
pub mod tracing;

pub use self::tracing::{DEFAULT_FILTER, init, init_with_filter};
