use thiserror::Error;

use receivables_core::DomainError;

use crate::payment::PaymentId;

/// Billing failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BillingError {
    /// An invoice or payment was constructed with a non-positive amount.
    #[error("amount must be positive (got {amount})")]
    InvalidAmount { amount: i64 },

    /// The payment could not be fully allocated: the client's unpaid invoices
    /// ran out first. `unallocated` is what was left over.
    ///
    /// Allocations made before the invoices ran out are **not** rolled back.
    #[error("payment {payment_id} exceeds outstanding debt by {unallocated}")]
    Overpayment {
        payment_id: PaymentId,
        unallocated: i64,
    },

    /// Adding the invoice would push the client's total invoiced amount past
    /// `i64::MAX`.
    #[error("invoice amount {amount} overflows the client's invoiced total")]
    AmountOverflow { amount: i64 },

    /// The payment has no unallocated amount left to distribute.
    #[error("payment {payment_id} is already fully allocated")]
    AlreadyAllocated { payment_id: PaymentId },
}

impl From<BillingError> for DomainError {
    fn from(err: BillingError) -> Self {
        match err {
            BillingError::InvalidAmount { .. } | BillingError::AmountOverflow { .. } => {
                DomainError::validation(err.to_string())
            }
            BillingError::Overpayment { .. } | BillingError::AlreadyAllocated { .. } => {
                DomainError::invariant(err.to_string())
            }
        }
    }
}
