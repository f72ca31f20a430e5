use anyhow::Result;
use async_trait::async_trait;

use super::connection::{read_table, write_table, MemoryConnection};
use crate::domain::models::{Patient, PatientId};
use crate::storage::PatientStorage;

/// Repository for patient records
#[derive(Clone)]
pub struct PatientRepository {
    conn: MemoryConnection,
}

impl PatientRepository {
    pub fn new(conn: MemoryConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl PatientStorage for PatientRepository {
    async fn store_patient(&self, patient: &Patient) -> Result<()> {
        let mut patients = write_table(&self.conn.tables().patients, "patients")?;
        patients.insert(patient.id, patient.clone());
        Ok(())
    }

    async fn get_patient(&self, patient_id: PatientId) -> Result<Option<Patient>> {
        let patients = read_table(&self.conn.tables().patients, "patients")?;
        Ok(patients.get(&patient_id).cloned())
    }

    async fn list_patients(&self) -> Result<Vec<Patient>> {
        let patients = read_table(&self.conn.tables().patients, "patients")?;
        Ok(patients.values().cloned().collect())
    }
}
