//! Domain model for an invoice.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Consultation, ConsultationId, InvoiceId};

/// Tax applied when no other rate is configured
pub const DEFAULT_TAX_RATE: f64 = 0.10;

/// Round half away from zero to whole cents
pub fn round_to_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// A bill for one consultation. The total is never stored; it is derived from
/// the consultation each time it is asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: InvoiceId,
    pub consultation_id: ConsultationId,
    pub tax_rate: f64,
    pub closed: bool,
    pub issued_at: DateTime<Utc>,
}

impl Invoice {
    pub fn new(id: InvoiceId, consultation_id: ConsultationId, tax_rate: f64) -> Self {
        Self {
            id,
            consultation_id,
            tax_rate,
            closed: false,
            issued_at: Utc::now(),
        }
    }

    /// `fee + items + (fee + items) * tax_rate`, rounded to cents
    pub fn calculate_total(&self, consultation: &Consultation) -> f64 {
        let subtotal = consultation.subtotal();
        round_to_cents(subtotal + subtotal * self.tax_rate)
    }

    /// Close the invoice. Returns false if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.closed {
            return false;
        }
        self.closed = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{AppointmentId, Prescription, PrescriptionItem};

    fn consultation(fee: f64, items: &[(&str, f64)]) -> Consultation {
        let mut prescription = Prescription::new();
        for (name, price) in items {
            prescription.add_item(PrescriptionItem::new(*name, *price).unwrap());
        }
        Consultation {
            id: ConsultationId(1),
            appointment_id: AppointmentId(1),
            prescription,
            consultation_fee: fee,
        }
    }

    #[test]
    fn test_total_with_two_items() {
        let consultation = consultation(20.0, &[("Paracetamol", 5.0), ("Bandage", 2.5)]);
        let invoice = Invoice::new(InvoiceId(1), consultation.id, DEFAULT_TAX_RATE);

        assert_eq!(invoice.calculate_total(&consultation), 30.25);
    }

    #[test]
    fn test_total_with_one_item() {
        let consultation = consultation(50.0, &[("Aspirin", 3.0)]);
        let invoice = Invoice::new(InvoiceId(1), consultation.id, DEFAULT_TAX_RATE);

        assert_eq!(invoice.calculate_total(&consultation), 58.3);
    }

    #[test]
    fn test_total_follows_prescription_changes() {
        let mut consultation = consultation(10.0, &[]);
        let invoice = Invoice::new(InvoiceId(1), consultation.id, DEFAULT_TAX_RATE);
        assert_eq!(invoice.calculate_total(&consultation), 11.0);

        consultation.prescription.add_item(PrescriptionItem::new("Syrup", 10.0).unwrap());
        assert_eq!(invoice.calculate_total(&consultation), 22.0);
    }

    #[test]
    fn test_close_is_terminal() {
        let mut invoice = Invoice::new(InvoiceId(1), ConsultationId(1), DEFAULT_TAX_RATE);
        assert!(invoice.close());
        assert!(!invoice.close());
        assert!(invoice.closed);
    }

    #[test]
    fn test_round_to_cents() {
        assert_eq!(round_to_cents(58.300000000000004), 58.3);
        assert_eq!(round_to_cents(0.125), 0.13);
        assert_eq!(round_to_cents(10.0), 10.0);
    }
}
