//! Billing domain module: invoices, payments and FIFO payment allocation.
//!
//! This crate contains the business rules for a client's receivables,
//! implemented purely as in-memory domain logic (no IO, no HTTP, no storage).

pub mod allocation;
pub mod client;
pub mod error;
pub mod invoice;
pub mod payment;
pub mod statement;

pub use allocation::PaymentAllocation;
pub use client::{Client, ClientId};
pub use error::BillingError;
pub use invoice::{Invoice, InvoiceId, InvoiceStatus};
pub use payment::{Payment, PaymentId};
pub use statement::{Statement, StatementLine};
