use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::connection::{lock_row, read_table, write_table, MemoryConnection};
use crate::domain::models::{Doctor, DoctorId, Slot};
use crate::storage::DoctorStorage;

/// Repository for doctors and their slot availability
#[derive(Clone)]
pub struct DoctorRepository {
    conn: MemoryConnection,
}

impl DoctorRepository {
    pub fn new(conn: MemoryConnection) -> Self {
        Self { conn }
    }

    /// Look up the row for one doctor; the table lock is released on return
    fn doctor_row(&self, doctor_id: DoctorId) -> Result<Option<Arc<Mutex<Doctor>>>> {
        let doctors = read_table(&self.conn.tables().doctors, "doctors")?;
        Ok(doctors.get(&doctor_id).cloned())
    }
}

#[async_trait]
impl DoctorStorage for DoctorRepository {
    async fn store_doctor(&self, doctor: &Doctor) -> Result<()> {
        let mut doctors = write_table(&self.conn.tables().doctors, "doctors")?;
        doctors.insert(doctor.id, Arc::new(Mutex::new(doctor.clone())));
        Ok(())
    }

    async fn get_doctor(&self, doctor_id: DoctorId) -> Result<Option<Doctor>> {
        match self.doctor_row(doctor_id)? {
            Some(row) => Ok(Some(lock_row(&row, "doctors")?.clone())),
            None => Ok(None),
        }
    }

    async fn list_doctors(&self) -> Result<Vec<Doctor>> {
        let doctors = read_table(&self.conn.tables().doctors, "doctors")?;
        let listed = doctors
            .values()
            .map(|row| -> Result<Doctor> { Ok(lock_row(row, "doctors")?.clone()) })
            .collect::<Result<Vec<_>>>();
        listed
    }

    async fn is_slot_available(&self, doctor_id: DoctorId, slot: &Slot) -> Result<bool> {
        match self.doctor_row(doctor_id)? {
            Some(row) => Ok(lock_row(&row, "doctors")?.is_slot_available(slot)),
            None => Ok(false),
        }
    }

    async fn book_slot(&self, doctor_id: DoctorId, slot: &Slot) -> Result<bool> {
        match self.doctor_row(doctor_id)? {
            Some(row) => Ok(lock_row(&row, "doctors")?.book_slot(slot)),
            None => Ok(false),
        }
    }

    async fn free_slot(&self, doctor_id: DoctorId, slot: &Slot) -> Result<()> {
        if let Some(row) = self.doctor_row(doctor_id)? {
            lock_row(&row, "doctors")?.free_slot(slot.clone());
        }
        Ok(())
    }
}
