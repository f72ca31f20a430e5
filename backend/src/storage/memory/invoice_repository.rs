use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::connection::{lock_row, read_table, write_table, MemoryConnection};
use crate::domain::models::{ConsultationId, Invoice, InvoiceId};
use crate::storage::InvoiceStorage;

/// Repository for invoices
#[derive(Clone)]
pub struct InvoiceRepository {
    conn: MemoryConnection,
}

impl InvoiceRepository {
    pub fn new(conn: MemoryConnection) -> Self {
        Self { conn }
    }

    fn invoice_row(&self, invoice_id: InvoiceId) -> Result<Option<Arc<Mutex<Invoice>>>> {
        let invoices = read_table(&self.conn.tables().invoices, "invoices")?;
        Ok(invoices.by_id.get(&invoice_id).cloned())
    }
}

#[async_trait]
impl InvoiceStorage for InvoiceRepository {
    async fn store_invoice(&self, invoice: &Invoice) -> Result<Option<InvoiceId>> {
        let mut invoices = write_table(&self.conn.tables().invoices, "invoices")?;
        if let Some(existing) = invoices.by_consultation.get(&invoice.consultation_id) {
            return Ok(Some(*existing));
        }
        invoices.by_consultation.insert(invoice.consultation_id, invoice.id);
        invoices.by_id.insert(invoice.id, Arc::new(Mutex::new(invoice.clone())));
        Ok(None)
    }

    async fn get_invoice(&self, invoice_id: InvoiceId) -> Result<Option<Invoice>> {
        match self.invoice_row(invoice_id)? {
            Some(row) => Ok(Some(lock_row(&row, "invoices")?.clone())),
            None => Ok(None),
        }
    }

    async fn find_invoice_for_consultation(&self, consultation_id: ConsultationId) -> Result<Option<Invoice>> {
        let row = {
            let invoices = read_table(&self.conn.tables().invoices, "invoices")?;
            invoices
                .by_consultation
                .get(&consultation_id)
                .and_then(|invoice_id| invoices.by_id.get(invoice_id).cloned())
        };
        match row {
            Some(row) => Ok(Some(lock_row(&row, "invoices")?.clone())),
            None => Ok(None),
        }
    }

    async fn close_invoice(&self, invoice_id: InvoiceId) -> Result<bool> {
        match self.invoice_row(invoice_id)? {
            Some(row) => Ok(lock_row(&row, "invoices")?.close()),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::DEFAULT_TAX_RATE;

    #[tokio::test]
    async fn test_one_invoice_per_consultation() {
        let repo = InvoiceRepository::new(MemoryConnection::new());

        let first = Invoice::new(InvoiceId(1), ConsultationId(7), DEFAULT_TAX_RATE);
        assert_eq!(repo.store_invoice(&first).await.unwrap(), None);

        let second = Invoice::new(InvoiceId(2), ConsultationId(7), DEFAULT_TAX_RATE);
        assert_eq!(repo.store_invoice(&second).await.unwrap(), Some(InvoiceId(1)));
        assert!(repo.get_invoice(InvoiceId(2)).await.unwrap().is_none());

        let found = repo.find_invoice_for_consultation(ConsultationId(7)).await.unwrap().unwrap();
        assert_eq!(found.id, InvoiceId(1));
        assert!(repo.find_invoice_for_consultation(ConsultationId(8)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_close_invoice_is_compare_and_swap() {
        let repo = InvoiceRepository::new(MemoryConnection::new());
        repo.store_invoice(&Invoice::new(InvoiceId(1), ConsultationId(1), DEFAULT_TAX_RATE))
            .await
            .unwrap();

        assert!(repo.close_invoice(InvoiceId(1)).await.unwrap());
        assert!(!repo.close_invoice(InvoiceId(1)).await.unwrap());
        assert!(!repo.close_invoice(InvoiceId(5)).await.unwrap());
        assert!(repo.get_invoice(InvoiceId(1)).await.unwrap().unwrap().closed);
    }
}
