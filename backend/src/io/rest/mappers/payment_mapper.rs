use crate::domain::commands::payments::RecordPaymentCommand;
use crate::domain::models::{round_to_cents, InvoiceId, Payment as DomainPayment, PaymentOutcome};
use shared::{Payment as SharedPayment, PaymentResponse, RecordPaymentRequest};

/// Mapper between shared Payment DTOs and domain payments.
pub struct PaymentMapper;

impl PaymentMapper {
    pub fn to_dto(domain: DomainPayment) -> SharedPayment {
        SharedPayment {
            id: domain.id.value(),
            invoice_id: domain.invoice_id.value(),
            amount: domain.amount,
            settled: domain.settled,
            recorded_at: domain.recorded_at.to_rfc3339(),
        }
    }

    pub fn to_record_command(request: RecordPaymentRequest) -> RecordPaymentCommand {
        RecordPaymentCommand {
            invoice_id: InvoiceId(request.invoice_id),
            amount: request.amount,
        }
    }

    /// `amount_due` is what is still missing for a rejected payment, zero otherwise
    pub fn to_payment_response_dto(outcome: PaymentOutcome) -> PaymentResponse {
        match outcome {
            PaymentOutcome::Settled { payment, .. } => PaymentResponse {
                message: format!("Payment settled. Invoice {} is closed.", payment.invoice_id),
                payment: Self::to_dto(payment),
                settled: true,
                amount_due: 0.0,
            },
            PaymentOutcome::Rejected { payment, total, reason } => PaymentResponse {
                amount_due: round_to_cents(total - payment.amount),
                message: reason.to_string(),
                payment: Self::to_dto(payment),
                settled: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::PaymentId;
    use crate::domain::ClinicError;

    #[test]
    fn test_rejected_outcome_reports_amount_due() {
        let outcome = PaymentOutcome::Rejected {
            payment: DomainPayment::new(PaymentId(3), InvoiceId(1), 58.29),
            total: 58.3,
            reason: ClinicError::InsufficientPayment {
                amount: 58.29,
                total: 58.3,
            },
        };

        let response = PaymentMapper::to_payment_response_dto(outcome);

        assert!(!response.settled);
        assert_eq!(response.amount_due, 0.01);
        assert_eq!(response.payment.id, 3);
        assert_eq!(response.message, "Payment amount 58.29 is less than invoice total 58.30");
    }

    #[test]
    fn test_settled_outcome() {
        let mut payment = DomainPayment::new(PaymentId(1), InvoiceId(2), 60.0);
        payment.settled = true;

        let response = PaymentMapper::to_payment_response_dto(PaymentOutcome::Settled { payment, total: 58.3 });

        assert!(response.settled);
        assert!(response.payment.settled);
        assert_eq!(response.amount_due, 0.0);
        assert_eq!(response.message, "Payment settled. Invoice 2 is closed.");
    }
}
