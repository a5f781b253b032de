//! Client statement: a serialisable snapshot of invoices and balance.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::{Client, ClientId};
use crate::invoice::{InvoiceId, InvoiceStatus};

/// One invoice as it stands on the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatementLine {
    pub invoice_id: InvoiceId,
    pub amount: i64,
    pub paid: i64,
    pub outstanding: i64,
    pub status: InvoiceStatus,
}

/// Read model for reporting a client's position.
///
/// Lines are in invoice creation order; `balance` always equals
/// `Client::balance()` at the time the statement was taken.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    pub client_id: ClientId,
    pub generated_at: DateTime<Utc>,
    pub total_invoiced: i64,
    pub total_paid: i64,
    pub balance: i64,
    pub lines: Vec<StatementLine>,
}

impl Statement {
    pub fn from_client(client: &Client) -> Self {
        let lines: Vec<StatementLine> = client
            .invoices()
            .iter()
            .map(|invoice| StatementLine {
                invoice_id: invoice.id_typed(),
                amount: invoice.amount(),
                paid: invoice.amount_paid(),
                outstanding: invoice.outstanding_amount(),
                status: invoice.status(),
            })
            .collect();

        // Bounded by the client's invoiced total, which cannot overflow.
        let total_invoiced = client.total_invoiced();
        let total_paid: i64 = lines.iter().map(|l| l.paid).sum();

        Self {
            client_id: client.id_typed(),
            generated_at: Utc::now(),
            total_invoiced,
            total_paid,
            balance: client.balance(),
            lines,
        }
    }

    /// Lines for invoices that still have something outstanding.
    pub fn open_lines(&self) -> impl Iterator<Item = &StatementLine> {
        self.lines.iter().filter(|l| l.status != InvoiceStatus::Paid)
    }
}
