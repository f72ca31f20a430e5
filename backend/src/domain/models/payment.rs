//! Domain model for a payment attempt.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{InvoiceId, PaymentId};
use crate::domain::ClinicError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: PaymentId,
    pub invoice_id: InvoiceId,
    pub amount: f64,
    pub settled: bool,
    pub recorded_at: DateTime<Utc>,
}

impl Payment {
    pub fn new(id: PaymentId, invoice_id: InvoiceId, amount: f64) -> Self {
        Self {
            id,
            invoice_id,
            amount,
            settled: false,
            recorded_at: Utc::now(),
        }
    }

    /// Whether this amount covers `total`
    pub fn covers(&self, total: f64) -> bool {
        self.amount >= total
    }
}

/// What happened to a payment attempt that reached an open invoice
#[derive(Debug)]
pub enum PaymentOutcome {
    /// The invoice was closed by this payment
    Settled { payment: Payment, total: f64 },
    /// The payment did not settle; the invoice is still open
    Rejected {
        payment: Payment,
        total: f64,
        reason: ClinicError,
    },
}

impl PaymentOutcome {
    pub fn payment(&self) -> &Payment {
        match self {
            PaymentOutcome::Settled { payment, .. } => payment,
            PaymentOutcome::Rejected { payment, .. } => payment,
        }
    }

    pub fn total(&self) -> f64 {
        match self {
            PaymentOutcome::Settled { total, .. } => *total,
            PaymentOutcome::Rejected { total, .. } => *total,
        }
    }

    pub fn is_settled(&self) -> bool {
        matches!(self, PaymentOutcome::Settled { .. })
    }
}
