//! Appointment scheduling.
//!
//! Booking a slot and creating the appointment are one logical step: the slot
//! is taken with an atomic check-and-remove, and if the appointment cannot be
//! stored afterwards the slot is handed back before the error is returned.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::commands::appointments::ScheduleAppointmentCommand;
use crate::domain::models::{Appointment, AppointmentDetails, AppointmentId, EntityKind};
use crate::domain::{ClinicError, DoctorService, PatientService};
use crate::storage::{AppointmentStorage, Connection, IdAllocator};

/// Service for booking appointments against doctor availability
#[derive(Clone)]
pub struct AppointmentService<C: Connection> {
    appointment_repository: C::AppointmentRepository,
    patient_service: PatientService<C>,
    doctor_service: DoctorService<C>,
    ids: Arc<IdAllocator>,
}

impl<C: Connection> AppointmentService<C> {
    pub fn new(conn: &C, patient_service: PatientService<C>, doctor_service: DoctorService<C>) -> Self {
        Self {
            appointment_repository: conn.create_appointment_repository(),
            patient_service,
            doctor_service,
            ids: conn.id_allocator(),
        }
    }

    /// Book `slot` with a doctor for a patient
    pub async fn schedule_appointment(&self, command: ScheduleAppointmentCommand) -> Result<Appointment, ClinicError> {
        info!(
            "Scheduling appointment: patient={}, doctor={}, slot={}",
            command.patient_id, command.doctor_id, command.slot
        );

        self.patient_service.require_patient(command.patient_id).await?;
        self.doctor_service.require_doctor(command.doctor_id).await?;

        if !self.doctor_service.book_slot(command.doctor_id, &command.slot).await? {
            warn!("Slot {} not available for doctor {}", command.slot, command.doctor_id);
            return Err(ClinicError::SlotUnavailable {
                doctor_id: command.doctor_id,
                slot: command.slot,
            });
        }

        let appointment = Appointment::new(
            self.ids.next_appointment_id(),
            command.patient_id,
            command.doctor_id,
            command.slot,
        );

        if let Err(e) = self.appointment_repository.store_appointment(&appointment).await {
            error!("Failed to store appointment {}, releasing slot: {}", appointment.id, e);
            self.doctor_service.free_slot(appointment.doctor_id, &appointment.slot).await?;
            return Err(e.into());
        }

        info!("Appointment scheduled with ID: {} at slot {}", appointment.id, appointment.slot);
        Ok(appointment)
    }

    pub async fn get_appointment(&self, appointment_id: AppointmentId) -> Result<Option<Appointment>, ClinicError> {
        Ok(self.appointment_repository.get_appointment(appointment_id).await?)
    }

    /// Get an appointment by ID, failing with `NotFound` if it does not exist
    pub async fn require_appointment(&self, appointment_id: AppointmentId) -> Result<Appointment, ClinicError> {
        self.get_appointment(appointment_id)
            .await?
            .ok_or_else(|| ClinicError::not_found(EntityKind::Appointment, appointment_id))
    }

    /// All appointments in the order they were scheduled
    pub async fn list_appointments(&self) -> Result<Vec<Appointment>, ClinicError> {
        let appointments = self.appointment_repository.list_appointments().await?;
        info!("Found {} appointments", appointments.len());
        Ok(appointments)
    }

    /// Attach patient and doctor names to an appointment
    pub async fn details(&self, appointment: Appointment) -> Result<AppointmentDetails, ClinicError> {
        let patient = self.patient_service.require_patient(appointment.patient_id).await?;
        let doctor = self.doctor_service.require_doctor(appointment.doctor_id).await?;
        Ok(AppointmentDetails {
            appointment,
            patient_name: patient.name,
            doctor_name: doctor.name,
        })
    }

    /// All appointments with names attached, in scheduling order
    pub async fn list_appointment_details(&self) -> Result<Vec<AppointmentDetails>, ClinicError> {
        let mut details = Vec::new();
        for appointment in self.list_appointments().await? {
            details.push(self.details(appointment).await?);
        }
        Ok(details)
    }
}
