use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

use super::connection::{lock_row, read_table, write_table, MemoryConnection};
use crate::domain::models::{Appointment, AppointmentId};
use crate::storage::AppointmentStorage;

/// Repository for appointments
#[derive(Clone)]
pub struct AppointmentRepository {
    conn: MemoryConnection,
}

impl AppointmentRepository {
    pub fn new(conn: MemoryConnection) -> Self {
        Self { conn }
    }

    fn appointment_row(&self, appointment_id: AppointmentId) -> Result<Option<Arc<Mutex<Appointment>>>> {
        let appointments = read_table(&self.conn.tables().appointments, "appointments")?;
        Ok(appointments.get(&appointment_id).cloned())
    }
}

#[async_trait]
impl AppointmentStorage for AppointmentRepository {
    async fn store_appointment(&self, appointment: &Appointment) -> Result<()> {
        let mut appointments = write_table(&self.conn.tables().appointments, "appointments")?;
        appointments.insert(appointment.id, Arc::new(Mutex::new(appointment.clone())));
        Ok(())
    }

    async fn get_appointment(&self, appointment_id: AppointmentId) -> Result<Option<Appointment>> {
        match self.appointment_row(appointment_id)? {
            Some(row) => Ok(Some(lock_row(&row, "appointments")?.clone())),
            None => Ok(None),
        }
    }

    async fn list_appointments(&self) -> Result<Vec<Appointment>> {
        let appointments = read_table(&self.conn.tables().appointments, "appointments")?;
        let listed = appointments
            .values()
            .map(|row| -> Result<Appointment> { Ok(lock_row(row, "appointments")?.clone()) })
            .collect::<Result<Vec<_>>>();
        listed
    }

    async fn mark_completed(&self, appointment_id: AppointmentId) -> Result<bool> {
        match self.appointment_row(appointment_id)? {
            Some(row) => Ok(lock_row(&row, "appointments")?.complete()),
            None => Ok(false),
        }
    }
}
