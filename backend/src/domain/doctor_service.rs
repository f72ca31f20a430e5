//! Doctor registry and slot availability.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::domain::commands::doctors::CreateDoctorCommand;
use crate::domain::models::{Doctor, DoctorId, EntityKind, Slot};
use crate::domain::ClinicError;
use crate::storage::{Connection, DoctorStorage, IdAllocator};

/// Service for registering doctors and managing their free slots
#[derive(Clone)]
pub struct DoctorService<C: Connection> {
    doctor_repository: C::DoctorRepository,
    ids: Arc<IdAllocator>,
}

impl<C: Connection> DoctorService<C> {
    pub fn new(conn: &C) -> Self {
        Self {
            doctor_repository: conn.create_doctor_repository(),
            ids: conn.id_allocator(),
        }
    }

    /// Register a new doctor with an initial set of free slots
    pub async fn add_doctor(&self, command: CreateDoctorCommand) -> Result<Doctor, ClinicError> {
        info!(
            "Creating doctor: name={}, specialization={}, slots={:?}",
            command.name, command.specialization, command.slots
        );

        let name = command.name.trim();
        if name.is_empty() {
            return Err(ClinicError::Validation("Doctor name cannot be empty".to_string()));
        }

        let doctor = Doctor {
            id: self.ids.next_doctor_id(),
            name: name.to_string(),
            specialization: command.specialization,
            available_slots: command.slots.into_iter().map(Slot::from).collect(),
        };

        self.doctor_repository.store_doctor(&doctor).await?;

        info!(
            "Created doctor: {} with ID: {} and {} free slots",
            doctor.name,
            doctor.id,
            doctor.available_slots.len()
        );
        Ok(doctor)
    }

    pub async fn get_doctor(&self, doctor_id: DoctorId) -> Result<Option<Doctor>, ClinicError> {
        let doctor = self.doctor_repository.get_doctor(doctor_id).await?;
        if doctor.is_none() {
            warn!("Doctor not found: {}", doctor_id);
        }
        Ok(doctor)
    }

    /// Get a doctor by ID, failing with `NotFound` if it does not exist
    pub async fn require_doctor(&self, doctor_id: DoctorId) -> Result<Doctor, ClinicError> {
        self.get_doctor(doctor_id)
            .await?
            .ok_or_else(|| ClinicError::not_found(EntityKind::Doctor, doctor_id))
    }

    pub async fn list_doctors(&self) -> Result<Vec<Doctor>, ClinicError> {
        let doctors = self.doctor_repository.list_doctors().await?;
        info!("Found {} doctors", doctors.len());
        Ok(doctors)
    }

    /// Free slots of one doctor, sorted by label
    pub async fn available_slots(&self, doctor_id: DoctorId) -> Result<Vec<Slot>, ClinicError> {
        let doctor = self.require_doctor(doctor_id).await?;
        Ok(doctor.available_slots.into_iter().collect())
    }

    pub async fn is_slot_available(&self, doctor_id: DoctorId, slot: &Slot) -> Result<bool, ClinicError> {
        Ok(self.doctor_repository.is_slot_available(doctor_id, slot).await?)
    }

    /// Take a free slot. Returns false if it is already booked or unknown.
    pub async fn book_slot(&self, doctor_id: DoctorId, slot: &Slot) -> Result<bool, ClinicError> {
        let booked = self.doctor_repository.book_slot(doctor_id, slot).await?;
        debug!("Book slot {} for doctor {}: {}", slot, doctor_id, booked);
        Ok(booked)
    }

    /// Return a slot to the doctor's free set
    pub async fn free_slot(&self, doctor_id: DoctorId, slot: &Slot) -> Result<(), ClinicError> {
        self.doctor_repository.free_slot(doctor_id, slot).await?;
        debug!("Freed slot {} for doctor {}", slot, doctor_id);
        Ok(())
    }
}
