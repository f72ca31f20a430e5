use anyhow::Result;
use async_trait::async_trait;

use super::connection::{read_table, write_table, MemoryConnection};
use crate::domain::models::{InvoiceId, Payment, PaymentId};
use crate::storage::PaymentStorage;

/// Repository for payments
#[derive(Clone)]
pub struct PaymentRepository {
    conn: MemoryConnection,
}

impl PaymentRepository {
    pub fn new(conn: MemoryConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl PaymentStorage for PaymentRepository {
    async fn store_payment(&self, payment: &Payment) -> Result<()> {
        let mut payments = write_table(&self.conn.tables().payments, "payments")?;
        payments.insert(payment.id, payment.clone());
        Ok(())
    }

    async fn get_payment(&self, payment_id: PaymentId) -> Result<Option<Payment>> {
        let payments = read_table(&self.conn.tables().payments, "payments")?;
        Ok(payments.get(&payment_id).cloned())
    }

    async fn list_payments_for_invoice(&self, invoice_id: InvoiceId) -> Result<Vec<Payment>> {
        let payments = read_table(&self.conn.tables().payments, "payments")?;
        Ok(payments
            .values()
            .filter(|payment| payment.invoice_id == invoice_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_list_payments_for_invoice() {
        let repo = PaymentRepository::new(MemoryConnection::new());
        repo.store_payment(&Payment::new(PaymentId(1), InvoiceId(1), 10.0)).await.unwrap();
        repo.store_payment(&Payment::new(PaymentId(2), InvoiceId(2), 20.0)).await.unwrap();
        repo.store_payment(&Payment::new(PaymentId(3), InvoiceId(1), 30.0)).await.unwrap();

        let amounts: Vec<f64> = repo
            .list_payments_for_invoice(InvoiceId(1))
            .await
            .unwrap()
            .iter()
            .map(|p| p.amount)
            .collect();
        assert_eq!(amounts, vec![10.0, 30.0]);
        assert_eq!(repo.get_payment(PaymentId(2)).await.unwrap().unwrap().amount, 20.0);
    }
}
