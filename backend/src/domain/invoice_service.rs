//! Invoice generation.
//!
//! An invoice stores only its consultation, tax rate and open/closed state. The
//! total is recomputed from the consultation every time it is requested, so it
//! always reflects the current prescription.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::invoices::{GenerateInvoiceCommand, InvoiceSummary};
use crate::domain::models::{EntityKind, Invoice, InvoiceId};
use crate::domain::ClinicError;
use crate::storage::{Connection, ConsultationStorage, IdAllocator, InvoiceStorage};

/// Service for issuing invoices and computing their totals
#[derive(Clone)]
pub struct InvoiceService<C: Connection> {
    consultation_repository: C::ConsultationRepository,
    invoice_repository: C::InvoiceRepository,
    ids: Arc<IdAllocator>,
    tax_rate: f64,
}

impl<C: Connection> InvoiceService<C> {
    pub fn new(conn: &C, tax_rate: f64) -> Self {
        Self {
            consultation_repository: conn.create_consultation_repository(),
            invoice_repository: conn.create_invoice_repository(),
            ids: conn.id_allocator(),
            tax_rate,
        }
    }

    pub fn tax_rate(&self) -> f64 {
        self.tax_rate
    }

    /// Issue the invoice for a consultation
    pub async fn generate_invoice(&self, command: GenerateInvoiceCommand) -> Result<InvoiceSummary, ClinicError> {
        info!("Generating invoice for consultation {}", command.consultation_id);

        if self
            .consultation_repository
            .get_consultation(command.consultation_id)
            .await?
            .is_none()
        {
            warn!("Consultation not found: {}", command.consultation_id);
            return Err(ClinicError::not_found(EntityKind::Consultation, command.consultation_id));
        }

        if let Some(existing) = self
            .invoice_repository
            .find_invoice_for_consultation(command.consultation_id)
            .await?
        {
            return Err(ClinicError::InvoiceAlreadyExists {
                consultation_id: command.consultation_id,
                invoice_id: existing.id,
            });
        }

        let invoice = Invoice::new(self.ids.next_invoice_id(), command.consultation_id, self.tax_rate);

        // The store re-checks uniqueness in case another invoice won the race
        if let Some(existing) = self.invoice_repository.store_invoice(&invoice).await? {
            return Err(ClinicError::InvoiceAlreadyExists {
                consultation_id: command.consultation_id,
                invoice_id: existing,
            });
        }

        let total = self.calculate_total(&invoice).await?;
        info!("Invoice generated with ID: {}, Total: {:.2}", invoice.id, total);

        Ok(InvoiceSummary { invoice, total })
    }

    /// Current total of an invoice, derived from its consultation
    pub async fn calculate_total(&self, invoice: &Invoice) -> Result<f64, ClinicError> {
        let consultation = self
            .consultation_repository
            .get_consultation(invoice.consultation_id)
            .await?
            .ok_or_else(|| ClinicError::not_found(EntityKind::Consultation, invoice.consultation_id))?;
        Ok(invoice.calculate_total(&consultation))
    }

    pub async fn get_invoice(&self, invoice_id: InvoiceId) -> Result<Option<InvoiceSummary>, ClinicError> {
        match self.invoice_repository.get_invoice(invoice_id).await? {
            Some(invoice) => {
                let total = self.calculate_total(&invoice).await?;
                Ok(Some(InvoiceSummary { invoice, total }))
            }
            None => Ok(None),
        }
    }

    /// Get an invoice by ID, failing with `NotFound` if it does not exist
    pub async fn require_invoice(&self, invoice_id: InvoiceId) -> Result<Invoice, ClinicError> {
        self.invoice_repository
            .get_invoice(invoice_id)
            .await?
            .ok_or_else(|| ClinicError::not_found(EntityKind::Invoice, invoice_id))
    }

    /// Close an open invoice. Returns false if it was already closed.
    pub async fn close_invoice(&self, invoice_id: InvoiceId) -> Result<bool, ClinicError> {
        Ok(self.invoice_repository.close_invoice(invoice_id).await?)
    }
}
