use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use receivables_core::{Entity, EntityId};

use crate::allocation::PaymentAllocation;
use crate::error::BillingError;
use crate::payment::Payment;

/// Invoice identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InvoiceId(pub EntityId);

impl InvoiceId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for InvoiceId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Payment status, derived from the allocations applied so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    Open,
    PartiallyPaid,
    Paid,
}

/// A billable amount owed by a client.
///
/// The amount is fixed at creation; the only mutation is appending
/// allocations, and `amount_paid() <= amount` always holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invoice {
    id: InvoiceId,
    amount: i64,
    issued_at: DateTime<Utc>,
    allocations: Vec<PaymentAllocation>,
}

impl Invoice {
    pub fn new(amount: i64) -> Result<Self, BillingError> {
        if amount <= 0 {
            return Err(BillingError::InvalidAmount { amount });
        }

        Ok(Self {
            id: InvoiceId::new(EntityId::new()),
            amount,
            issued_at: Utc::now(),
            allocations: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> InvoiceId {
        self.id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn issued_at(&self) -> DateTime<Utc> {
        self.issued_at
    }

    /// Allocations applied to this invoice, in application order.
    pub fn allocations(&self) -> &[PaymentAllocation] {
        &self.allocations
    }

    pub fn amount_paid(&self) -> i64 {
        self.allocations.iter().map(PaymentAllocation::amount).sum()
    }

    pub fn outstanding_amount(&self) -> i64 {
        self.amount - self.amount_paid()
    }

    pub fn is_paid(&self) -> bool {
        self.amount_paid() == self.amount
    }

    pub fn status(&self) -> InvoiceStatus {
        match self.amount_paid() {
            0 => InvoiceStatus::Open,
            paid if paid == self.amount => InvoiceStatus::Paid,
            _ => InvoiceStatus::PartiallyPaid,
        }
    }

    /// Apply up to `remaining` of `payment` to this invoice.
    ///
    /// Contributes `min(remaining, outstanding)`, records the allocation on
    /// both the invoice and the payment, and returns what is left of
    /// `remaining`. The caller only passes unpaid invoices and a positive
    /// `remaining`.
    pub(crate) fn apply_payment(&mut self, payment: &mut Payment, remaining: i64) -> i64 {
        debug_assert!(remaining > 0, "apply_payment called with nothing to apply");
        debug_assert!(!self.is_paid(), "apply_payment called on a paid invoice");

        let contribution = remaining.min(self.outstanding_amount());
        let allocation = PaymentAllocation::new(payment.id_typed(), self.id, contribution);

        self.allocations.push(allocation);
        payment.record_allocation(allocation);

        debug!(
            invoice_id = %self.id,
            payment_id = %payment.id_typed(),
            contribution,
            remaining = remaining - contribution,
            "payment applied to invoice"
        );

        remaining - contribution
    }
}

impl Entity for Invoice {
    type Id = InvoiceId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
