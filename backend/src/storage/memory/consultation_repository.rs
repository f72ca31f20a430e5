use anyhow::Result;
use async_trait::async_trait;

use super::connection::{read_table, write_table, MemoryConnection};
use crate::domain::models::{Consultation, ConsultationId, PrescriptionItem};
use crate::storage::ConsultationStorage;

/// Repository for consultations and their prescriptions
#[derive(Clone)]
pub struct ConsultationRepository {
    conn: MemoryConnection,
}

impl ConsultationRepository {
    pub fn new(conn: MemoryConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl ConsultationStorage for ConsultationRepository {
    async fn store_consultation(&self, consultation: &Consultation) -> Result<()> {
        let mut consultations = write_table(&self.conn.tables().consultations, "consultations")?;
        consultations.insert(consultation.id, consultation.clone());
        Ok(())
    }

    async fn get_consultation(&self, consultation_id: ConsultationId) -> Result<Option<Consultation>> {
        let consultations = read_table(&self.conn.tables().consultations, "consultations")?;
        Ok(consultations.get(&consultation_id).cloned())
    }

    async fn append_prescription_item(
        &self,
        consultation_id: ConsultationId,
        item: &PrescriptionItem,
    ) -> Result<bool> {
        let mut consultations = write_table(&self.conn.tables().consultations, "consultations")?;
        match consultations.get_mut(&consultation_id) {
            Some(consultation) => {
                consultation.prescription.add_item(item.clone());
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
