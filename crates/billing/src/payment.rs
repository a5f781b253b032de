use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use receivables_core::{Entity, EntityId};

use crate::allocation::PaymentAllocation;
use crate::error::BillingError;

/// Payment identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentId(pub EntityId);

impl PaymentId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for PaymentId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// An incoming sum of money, applied against one or more invoices.
///
/// Payments are created by the caller and lent to `Client::process_payment`;
/// the client never takes ownership of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payment {
    id: PaymentId,
    amount: i64,
    received_at: DateTime<Utc>,
    allocations: Vec<PaymentAllocation>,
}

impl Payment {
    /// New payment received now.
    pub fn new(amount: i64) -> Result<Self, BillingError> {
        Self::received_on(amount, Utc::now())
    }

    /// New payment with an explicit receive time.
    pub fn received_on(amount: i64, received_at: DateTime<Utc>) -> Result<Self, BillingError> {
        if amount <= 0 {
            return Err(BillingError::InvalidAmount { amount });
        }

        Ok(Self {
            id: PaymentId::new(EntityId::new()),
            amount,
            received_at,
            allocations: Vec::new(),
        })
    }

    pub fn id_typed(&self) -> PaymentId {
        self.id
    }

    pub fn amount(&self) -> i64 {
        self.amount
    }

    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// Allocations this payment produced, in application order.
    pub fn allocations(&self) -> &[PaymentAllocation] {
        &self.allocations
    }

    pub fn amount_allocated(&self) -> i64 {
        self.allocations.iter().map(PaymentAllocation::amount).sum()
    }

    pub fn unallocated_amount(&self) -> i64 {
        self.amount - self.amount_allocated()
    }

    pub fn is_fully_allocated(&self) -> bool {
        self.amount_allocated() == self.amount
    }

    pub(crate) fn record_allocation(&mut self, allocation: PaymentAllocation) {
        self.allocations.push(allocation);
    }
}

impl Entity for Payment {
    type Id = PaymentId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn zero_or_negative_amount_is_rejected() {
        for amount in [0, -1, -100] {
            let err = Payment::new(amount).unwrap_err();
            assert_eq!(err, BillingError::InvalidAmount { amount });
        }
    }

    #[test]
    fn new_payment_is_unallocated() {
        let payment = Payment::new(120).unwrap();
        assert_eq!(payment.amount(), 120);
        assert!(payment.allocations().is_empty());
        assert_eq!(payment.amount_allocated(), 0);
        assert_eq!(payment.unallocated_amount(), 120);
        assert!(!payment.is_fully_allocated());
    }

    #[test]
    fn received_on_keeps_given_time() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap();
        let payment = Payment::received_on(10, at).unwrap();
        assert_eq!(payment.received_at(), at);
    }

    #[test]
    fn each_payment_gets_its_own_id() {
        let a = Payment::new(1).unwrap();
        let b = Payment::new(1).unwrap();
        assert_ne!(a.id_typed(), b.id_typed());
        assert_eq!(Entity::id(&a), &a.id_typed());
    }
}
