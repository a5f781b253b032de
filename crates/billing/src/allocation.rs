//! Join record between a payment and an invoice.

use serde::{Deserialize, Serialize};

use receivables_core::ValueObject;

use crate::invoice::InvoiceId;
use crate::payment::PaymentId;

/// The portion of one payment attributed to one invoice.
///
/// Immutable once created. The same value is appended to the invoice's and
/// the payment's allocation lists; the ids are the only link between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentAllocation {
    payment_id: PaymentId,
    invoice_id: InvoiceId,
    amount: i64,
}

impl PaymentAllocation {
    /// Only `Invoice::apply_payment` creates allocations; it guarantees
    /// `amount` fits both the payment's remainder and the invoice's debt.
    pub(crate) fn new(payment_id: PaymentId, invoice_id: InvoiceId, amount: i64) -> Self {
        Self {
            payment_id,
            invoice_id,
            amount,
        }
    }

    pub fn payment_id(&self) -> PaymentId {
        self.payment_id
    }

    pub fn invoice_id(&self) -> InvoiceId {
        self.invoice_id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }
}

impl ValueObject for PaymentAllocation {}
