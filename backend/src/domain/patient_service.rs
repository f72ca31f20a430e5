//! Patient registry.
//!
//! Patients are registered once and never updated or removed.

use std::sync::Arc;
use tracing::{info, warn};

use crate::domain::commands::patients::CreatePatientCommand;
use crate::domain::models::{EntityKind, Patient, PatientId};
use crate::domain::ClinicError;
use crate::storage::{Connection, IdAllocator, PatientStorage};

/// Service for registering and looking up patients
#[derive(Clone)]
pub struct PatientService<C: Connection> {
    patient_repository: C::PatientRepository,
    ids: Arc<IdAllocator>,
}

impl<C: Connection> PatientService<C> {
    /// Create a new PatientService
    pub fn new(conn: &C) -> Self {
        Self {
            patient_repository: conn.create_patient_repository(),
            ids: conn.id_allocator(),
        }
    }

    /// Register a new patient
    pub async fn add_patient(&self, command: CreatePatientCommand) -> Result<Patient, ClinicError> {
        info!("Creating patient: name={}, contact={}", command.name, command.contact);

        let name = command.name.trim();
        if name.is_empty() {
            return Err(ClinicError::Validation("Patient name cannot be empty".to_string()));
        }

        let patient = Patient {
            id: self.ids.next_patient_id(),
            name: name.to_string(),
            contact: command.contact,
        };

        self.patient_repository.store_patient(&patient).await?;

        info!("Created patient: {} with ID: {}", patient.name, patient.id);
        Ok(patient)
    }

    /// Get a patient by ID
    pub async fn get_patient(&self, patient_id: PatientId) -> Result<Option<Patient>, ClinicError> {
        let patient = self.patient_repository.get_patient(patient_id).await?;
        if patient.is_none() {
            warn!("Patient not found: {}", patient_id);
        }
        Ok(patient)
    }

    /// Get a patient by ID, failing with `NotFound` if it does not exist
    pub async fn require_patient(&self, patient_id: PatientId) -> Result<Patient, ClinicError> {
        self.get_patient(patient_id)
            .await?
            .ok_or_else(|| ClinicError::not_found(EntityKind::Patient, patient_id))
    }

    /// List all patients in registration order
    pub async fn list_patients(&self) -> Result<Vec<Patient>, ClinicError> {
        let patients = self.patient_repository.list_patients().await?;
        info!("Found {} patients", patients.len());
        Ok(patients)
    }
}
