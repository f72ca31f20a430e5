use crate::domain::commands::invoices::{GenerateInvoiceCommand, InvoiceSummary};
use crate::domain::models::ConsultationId;
use shared::{GenerateInvoiceRequest, Invoice as SharedInvoice, InvoiceResponse};

/// Mapper between shared Invoice DTOs and domain invoices.
pub struct InvoiceMapper;

impl InvoiceMapper {
    pub fn to_dto(summary: InvoiceSummary) -> SharedInvoice {
        let InvoiceSummary { invoice, total } = summary;
        SharedInvoice {
            id: invoice.id.value(),
            consultation_id: invoice.consultation_id.value(),
            tax_rate: invoice.tax_rate,
            total,
            closed: invoice.closed,
            issued_at: invoice.issued_at.to_rfc3339(),
        }
    }

    pub fn to_generate_command(request: GenerateInvoiceRequest) -> GenerateInvoiceCommand {
        GenerateInvoiceCommand {
            consultation_id: ConsultationId(request.consultation_id),
        }
    }

    pub fn to_invoice_response_dto(summary: InvoiceSummary, message: &str) -> InvoiceResponse {
        InvoiceResponse {
            invoice: Self::to_dto(summary),
            success_message: message.to_string(),
        }
    }
}
