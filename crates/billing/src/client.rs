use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use receivables_core::{AggregateId, AggregateRoot, DomainError, DomainResult};

use crate::allocation::PaymentAllocation;
use crate::error::BillingError;
use crate::invoice::{Invoice, InvoiceId};
use crate::payment::Payment;
use crate::statement::Statement;

/// Client identifier (aggregate id).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientId(pub AggregateId);

impl ClientId {
    pub fn new(id: AggregateId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ClientId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Aggregate root: Client.
///
/// Owns the client's invoices in creation order. That order is the
/// allocation priority: the oldest unpaid invoice is always paid first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    id: ClientId,
    invoices: Vec<Invoice>,
    version: u64,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self::with_id(ClientId::new(AggregateId::new()))
    }

    pub fn with_id(id: ClientId) -> Self {
        Self {
            id,
            invoices: Vec::new(),
            version: 0,
        }
    }

    pub fn id_typed(&self) -> ClientId {
        self.id
    }

    /// Issue a new invoice for this client, appended after all existing ones.
    ///
    /// The client's total invoiced amount must stay within `i64`; every other
    /// sum (paid, outstanding, balance) is bounded by it.
    pub fn create_invoice(&mut self, amount: i64) -> Result<InvoiceId, BillingError> {
        let invoice = Invoice::new(amount)?;
        self.total_invoiced()
            .checked_add(amount)
            .ok_or(BillingError::AmountOverflow { amount })?;
        let invoice_id = invoice.id_typed();

        self.invoices.push(invoice);
        self.version += 1;

        info!(client_id = %self.id, %invoice_id, amount, "invoice created");
        Ok(invoice_id)
    }

    /// All invoices, in creation order.
    pub fn invoices(&self) -> &[Invoice] {
        &self.invoices
    }

    pub fn invoice(&self, invoice_id: InvoiceId) -> DomainResult<&Invoice> {
        self.invoices
            .iter()
            .find(|invoice| invoice.id_typed() == invoice_id)
            .ok_or_else(DomainError::not_found)
    }

    /// Invoices that are not fully paid, in creation order.
    pub fn unpaid_invoices(&self) -> Vec<&Invoice> {
        self.invoices.iter().filter(|invoice| !invoice.is_paid()).collect()
    }

    /// Every allocation against this client's invoices, grouped by invoice in
    /// creation order and then in application order.
    pub fn allocations(&self) -> impl Iterator<Item = &PaymentAllocation> + '_ {
        self.invoices.iter().flat_map(|invoice| invoice.allocations())
    }

    /// Sum of all invoice amounts. Cannot overflow: `create_invoice` rejects
    /// any invoice that would push it past `i64::MAX`.
    pub fn total_invoiced(&self) -> i64 {
        self.invoices.iter().map(Invoice::amount).sum()
    }

    /// Total invoiced minus total allocated.
    pub fn balance(&self) -> i64 {
        let paid: i64 = self.allocations().map(PaymentAllocation::amount).sum();
        self.total_invoiced() - paid
    }

    pub fn statement(&self) -> Statement {
        Statement::from_client(self)
    }

    /// Allocate `payment` across the unpaid invoices, oldest first.
    ///
    /// The set of unpaid invoices is fixed when the call starts. Each one
    /// receives `min(remaining, outstanding)` until the payment is used up.
    ///
    /// **Not transactional.** When the unpaid invoices run out before the
    /// payment does, this returns [`BillingError::Overpayment`] but every
    /// allocation already made in this call stays applied, on the invoices
    /// and on `payment`. Callers that need all-or-nothing semantics must
    /// check `balance()` first or compensate themselves; the unallocated
    /// remainder is reported in the error and by
    /// [`Payment::unallocated_amount`].
    ///
    /// Only the payment's unallocated amount is distributed, so a payment
    /// that was already fully allocated is rejected with
    /// [`BillingError::AlreadyAllocated`] and nothing changes.
    ///
    /// Concurrent payments against one client must be serialised by the
    /// caller.
    pub fn process_payment(&mut self, payment: &mut Payment) -> Result<(), BillingError> {
        let payment_id = payment.id_typed();
        let mut remaining = payment.unallocated_amount();
        if remaining == 0 {
            return Err(BillingError::AlreadyAllocated { payment_id });
        }

        let unpaid: Vec<usize> = self
            .invoices
            .iter()
            .enumerate()
            .filter(|(_, invoice)| !invoice.is_paid())
            .map(|(idx, _)| idx)
            .collect();

        let mut applied = 0usize;
        for idx in unpaid {
            remaining = self.invoices[idx].apply_payment(payment, remaining);
            applied += 1;

            if remaining == 0 {
                self.version += 1;
                info!(
                    client_id = %self.id,
                    %payment_id,
                    amount = payment.amount(),
                    invoices = applied,
                    "payment allocated"
                );
                return Ok(());
            }
        }

        if applied > 0 {
            self.version += 1;
        }
        warn!(
            client_id = %self.id,
            %payment_id,
            unallocated = remaining,
            committed_allocations = applied,
            "payment exceeds outstanding debt; prior allocations kept"
        );
        Err(BillingError::Overpayment {
            payment_id,
            unallocated: remaining,
        })
    }
}

impl AggregateRoot for Client {
    type Id = ClientId;

    fn id(&self) -> &Self::Id {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }
}
