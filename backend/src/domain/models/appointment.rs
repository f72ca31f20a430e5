//! Domain model for an appointment.
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{AppointmentId, DoctorId, PatientId, Slot};

/// A booked slot. `completed` moves from false to true exactly once, when a
/// consultation is recorded, and never goes back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,
    pub patient_id: PatientId,
    pub doctor_id: DoctorId,
    pub slot: Slot,
    pub completed: bool,
}

impl Appointment {
    pub fn new(id: AppointmentId, patient_id: PatientId, doctor_id: DoctorId, slot: Slot) -> Self {
        Self {
            id,
            patient_id,
            doctor_id,
            slot,
            completed: false,
        }
    }

    /// Mark the appointment completed. Returns false if it already was.
    pub fn complete(&mut self) -> bool {
        if self.completed {
            return false;
        }
        self.completed = true;
        true
    }
}

/// An appointment together with the names of the people involved, for display
#[derive(Debug, Clone, PartialEq)]
pub struct AppointmentDetails {
    pub appointment: Appointment,
    pub patient_name: String,
    pub doctor_name: String,
}

impl fmt::Display for AppointmentDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Appointment[id={}, patient={}, doctor={}, slot={}, completed={}]",
            self.appointment.id,
            self.patient_name,
            self.doctor_name,
            self.appointment.slot,
            self.appointment.completed
        )
    }
}
