//! Errors raised by the clinic domain services.

use super::models::{AppointmentId, ConsultationId, DoctorId, EntityKind, InvoiceId, Slot};

/// Every failure a domain operation can report.
///
/// None of these are fatal; the caller decides whether to retry. Business
/// validation that still produces an entity (an under-paying payment, a
/// malformed prescription line) is carried in the operation's result rather
/// than returned as `Err`.
#[derive(Debug, thiserror::Error)]
pub enum ClinicError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: EntityKind, id: u64 },

    #[error("Slot {slot} is not available for doctor {doctor_id}")]
    SlotUnavailable { doctor_id: DoctorId, slot: Slot },

    #[error("Consultation already recorded for appointment {appointment_id}")]
    AlreadyCompleted { appointment_id: AppointmentId },

    #[error("Invoice {invoice_id} is already paid and closed")]
    InvoiceAlreadyClosed { invoice_id: InvoiceId },

    #[error("Consultation {consultation_id} already has invoice {invoice_id}")]
    InvoiceAlreadyExists {
        consultation_id: ConsultationId,
        invoice_id: InvoiceId,
    },

    #[error("Prescription for consultation {consultation_id} is locked by invoice {invoice_id}")]
    PrescriptionLocked {
        consultation_id: ConsultationId,
        invoice_id: InvoiceId,
    },

    #[error("Invalid item format: {0}")]
    InvalidItemFormat(String),

    #[error("Payment amount {amount:.2} is less than invoice total {total:.2}")]
    InsufficientPayment { amount: f64, total: f64 },

    #[error("Consultation fee must be a non-negative number, got {0}")]
    InvalidFee(f64),

    #[error("Payment amount must be a non-negative number, got {0}")]
    InvalidAmount(f64),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(#[from] anyhow::Error),
}

impl ClinicError {
    pub fn not_found(entity: EntityKind, id: impl Into<u64>) -> Self {
        ClinicError::NotFound {
            entity,
            id: id.into(),
        }
    }

    /// Stable snake_case name used in API error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            ClinicError::NotFound { .. } => "not_found",
            ClinicError::SlotUnavailable { .. } => "slot_unavailable",
            ClinicError::AlreadyCompleted { .. } => "already_completed",
            ClinicError::InvoiceAlreadyClosed { .. } => "invoice_already_closed",
            ClinicError::InvoiceAlreadyExists { .. } => "invoice_already_exists",
            ClinicError::PrescriptionLocked { .. } => "prescription_locked",
            ClinicError::InvalidItemFormat(_) => "invalid_item_format",
            ClinicError::InsufficientPayment { .. } => "insufficient_payment",
            ClinicError::InvalidFee(_) => "invalid_fee",
            ClinicError::InvalidAmount(_) => "invalid_amount",
            ClinicError::Validation(_) => "validation",
            ClinicError::Storage(_) => "storage",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PatientId;

    #[test]
    fn test_not_found_message_names_entity() {
        let error = ClinicError::not_found(EntityKind::Patient, PatientId(42));
        assert_eq!(error.to_string(), "Patient not found: 42");
        assert_eq!(error.kind(), "not_found");
    }

    #[test]
    fn test_insufficient_payment_message_uses_cents() {
        let error = ClinicError::InsufficientPayment { amount: 58.29, total: 58.3 };
        assert_eq!(error.to_string(), "Payment amount 58.29 is less than invoice total 58.30");
    }
}
