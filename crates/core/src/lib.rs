//! `receivables-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the receivables
//! crates (no IO, no storage, no logging setup).

pub mod aggregate;
pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::{AggregateId, EntityId};
pub use value_object::ValueObject;
