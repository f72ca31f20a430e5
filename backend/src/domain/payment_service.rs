//! Payment processing.
//!
//! A payment is settled the moment it is recorded, or not at all. Settling
//! closes the invoice through a compare-and-swap, so two payments racing for
//! the same invoice can never both succeed.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::payments::RecordPaymentCommand;
use crate::domain::models::{EntityKind, InvoiceId, Payment, PaymentId, PaymentOutcome};
use crate::domain::{ClinicError, InvoiceService};
use crate::storage::{Connection, IdAllocator, PaymentStorage};

/// Service for settling invoices
#[derive(Clone)]
pub struct PaymentService<C: Connection> {
    payment_repository: C::PaymentRepository,
    invoice_service: InvoiceService<C>,
    ids: Arc<IdAllocator>,
}

impl<C: Connection> PaymentService<C> {
    pub fn new(conn: &C, invoice_service: InvoiceService<C>) -> Self {
        Self {
            payment_repository: conn.create_payment_repository(),
            invoice_service,
            ids: conn.id_allocator(),
        }
    }

    /// Attempt to settle an invoice with `amount`.
    ///
    /// An amount below the invoice total is not an error: the attempt comes
    /// back as `PaymentOutcome::Rejected` and the invoice stays open.
    pub async fn record_payment(&self, command: RecordPaymentCommand) -> Result<PaymentOutcome, ClinicError> {
        info!("Recording payment: invoice={}, amount={:.2}", command.invoice_id, command.amount);

        let invoice = self.invoice_service.require_invoice(command.invoice_id).await?;
        if invoice.closed {
            warn!("Invoice {} already paid and closed", invoice.id);
            return Err(ClinicError::InvoiceAlreadyClosed { invoice_id: invoice.id });
        }

        if !command.amount.is_finite() || command.amount < 0.0 {
            return Err(ClinicError::InvalidAmount(command.amount));
        }

        let total = self.invoice_service.calculate_total(&invoice).await?;
        let mut payment = Payment::new(self.ids.next_payment_id(), invoice.id, command.amount);

        if !payment.covers(total) {
            warn!(
                "Payment {} of {:.2} does not cover invoice {} total {:.2}",
                payment.id, payment.amount, invoice.id, total
            );
            return Ok(PaymentOutcome::Rejected {
                payment,
                total,
                reason: ClinicError::InsufficientPayment {
                    amount: command.amount,
                    total,
                },
            });
        }

        if !self.invoice_service.close_invoice(invoice.id).await? {
            warn!("Invoice {} was closed by another payment", invoice.id);
            return Err(ClinicError::InvoiceAlreadyClosed { invoice_id: invoice.id });
        }

        payment.settled = true;
        self.payment_repository.store_payment(&payment).await?;

        info!(
            "Payment settled and invoice closed: payment={}, invoice={}, amount={:.2}",
            payment.id, invoice.id, payment.amount
        );
        Ok(PaymentOutcome::Settled { payment, total })
    }

    pub async fn get_payment(&self, payment_id: PaymentId) -> Result<Option<Payment>, ClinicError> {
        Ok(self.payment_repository.get_payment(payment_id).await?)
    }

    /// Get a payment by ID, failing with `NotFound` if it does not exist
    pub async fn require_payment(&self, payment_id: PaymentId) -> Result<Payment, ClinicError> {
        self.get_payment(payment_id)
            .await?
            .ok_or_else(|| ClinicError::not_found(EntityKind::Payment, payment_id))
    }

    /// Settled payments made against an invoice
    pub async fn list_payments_for_invoice(&self, invoice_id: InvoiceId) -> Result<Vec<Payment>, ClinicError> {
        Ok(self.payment_repository.list_payments_for_invoice(invoice_id).await?)
    }
}
