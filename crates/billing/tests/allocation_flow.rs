//! End-to-end allocation flow through the public API, with logging enabled.

use anyhow::Result;

use receivables_billing::{BillingError, Client, InvoiceStatus, Payment, Statement};
use receivables_core::{AggregateRoot, DomainError};

#[test]
fn statement_reflects_split_payments() -> Result<()> {
    receivables_observability::init();

    let mut client = Client::new();
    for amount in [100, 100, 100] {
        client.create_invoice(amount)?;
    }

    let mut first = Payment::new(150)?;
    let mut second = Payment::new(150)?;
    client.process_payment(&mut first)?;
    client.process_payment(&mut second)?;

    assert_eq!(client.balance(), 0);
    assert_eq!(client.version(), 5);

    // First payment covers invoice 1 and half of invoice 2.
    let touched: Vec<_> = first.allocations().iter().map(|a| a.amount()).collect();
    assert_eq!(touched, vec![100, 50]);
    let touched: Vec<_> = second.allocations().iter().map(|a| a.amount()).collect();
    assert_eq!(touched, vec![50, 100]);

    let statement = client.statement();
    assert!(
        statement
            .lines
            .iter()
            .all(|line| line.status == InvoiceStatus::Paid)
    );
    Ok(())
}

#[test]
fn statement_round_trips_through_json() -> Result<()> {
    receivables_observability::init();

    let mut client = Client::new();
    client.create_invoice(100)?;
    client.create_invoice(100)?;
    client.process_payment(&mut Payment::new(50)?)?;

    let statement = client.statement();
    let json = serde_json::to_value(&statement)?;
    assert_eq!(json["balance"], 150);
    assert_eq!(json["lines"][0]["status"], "partially_paid");
    assert_eq!(json["lines"][1]["status"], "open");
    assert_eq!(json["client_id"], client.id_typed().to_string());

    let decoded: Statement = serde_json::from_value(json)?;
    assert_eq!(decoded, statement);
    Ok(())
}

#[test]
fn overpayment_surfaces_as_domain_invariant() -> Result<()> {
    receivables_observability::init();

    let mut client = Client::new();
    client.create_invoice(100)?;
    let mut payment = Payment::new(130)?;

    let err = client.process_payment(&mut payment).unwrap_err();
    assert!(matches!(err, BillingError::Overpayment { unallocated: 30, .. }));

    // Host boundary: translate into the shared domain error.
    match DomainError::from(err) {
        DomainError::InvariantViolation(msg) => assert!(msg.contains("by 30")),
        other => panic!("Expected InvariantViolation, got {other:?}"),
    }

    // Non-transactional: the covered invoice stays paid.
    assert_eq!(client.balance(), 0);
    assert_eq!(payment.unallocated_amount(), 30);
    Ok(())
}

#[test]
fn invalid_amounts_surface_as_domain_validation() {
    receivables_observability::init();

    let err: DomainError = Payment::new(-1).unwrap_err().into();
    assert!(matches!(err, DomainError::Validation(_)));

    let mut client = Client::new();
    let err: DomainError = client.create_invoice(0).unwrap_err().into();
    assert!(matches!(err, DomainError::Validation(_)));
}
