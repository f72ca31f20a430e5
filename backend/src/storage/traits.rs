//! # Storage Traits
//!
//! This module defines the storage abstraction traits that allow different
//! storage backends to be used interchangeably in the domain layer.
//!
//! Operations that must not race (booking a slot, completing an appointment,
//! closing an invoice, issuing the one invoice of a consultation) are single
//! trait methods so each backend can make them atomic.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::models::{
    Appointment, AppointmentId, Consultation, ConsultationId, Doctor, DoctorId, Invoice, InvoiceId,
    Patient, PatientId, Payment, PaymentId, PrescriptionItem, Slot,
};
use crate::storage::IdAllocator;

/// Trait defining the interface for patient storage operations
#[async_trait]
pub trait PatientStorage: Send + Sync {
    /// Store a new patient
    async fn store_patient(&self, patient: &Patient) -> Result<()>;

    /// Retrieve a specific patient by ID
    async fn get_patient(&self, patient_id: PatientId) -> Result<Option<Patient>>;

    /// List all patients in registration order
    async fn list_patients(&self) -> Result<Vec<Patient>>;
}

/// Trait defining the interface for doctor storage operations
#[async_trait]
pub trait DoctorStorage: Send + Sync {
    /// Store a new doctor
    async fn store_doctor(&self, doctor: &Doctor) -> Result<()>;

    /// Retrieve a specific doctor by ID, with the slots that are currently free
    async fn get_doctor(&self, doctor_id: DoctorId) -> Result<Option<Doctor>>;

    /// List all doctors in registration order
    async fn list_doctors(&self) -> Result<Vec<Doctor>>;

    /// Check whether a slot is free. Unknown doctors have no free slots.
    async fn is_slot_available(&self, doctor_id: DoctorId, slot: &Slot) -> Result<bool>;

    /// Atomically take a free slot
    /// Returns false if the slot was already booked or the doctor is unknown
    async fn book_slot(&self, doctor_id: DoctorId, slot: &Slot) -> Result<bool>;

    /// Return a slot to the free set. Freeing a free slot does nothing.
    async fn free_slot(&self, doctor_id: DoctorId, slot: &Slot) -> Result<()>;
}

/// Trait defining the interface for appointment storage operations
#[async_trait]
pub trait AppointmentStorage: Send + Sync {
    /// Store a new appointment
    async fn store_appointment(&self, appointment: &Appointment) -> Result<()>;

    /// Retrieve a specific appointment by ID
    async fn get_appointment(&self, appointment_id: AppointmentId) -> Result<Option<Appointment>>;

    /// List all appointments in the order they were scheduled
    async fn list_appointments(&self) -> Result<Vec<Appointment>>;

    /// Atomically flip `completed` to true
    /// Returns false if the appointment was already completed or does not exist
    async fn mark_completed(&self, appointment_id: AppointmentId) -> Result<bool>;
}

/// Trait defining the interface for consultation storage operations
#[async_trait]
pub trait ConsultationStorage: Send + Sync {
    /// Store a new consultation
    async fn store_consultation(&self, consultation: &Consultation) -> Result<()>;

    /// Retrieve a specific consultation by ID
    async fn get_consultation(&self, consultation_id: ConsultationId) -> Result<Option<Consultation>>;

    /// Append an item to a consultation's prescription
    /// Returns false if the consultation does not exist
    async fn append_prescription_item(
        &self,
        consultation_id: ConsultationId,
        item: &PrescriptionItem,
    ) -> Result<bool>;
}

/// Trait defining the interface for invoice storage operations
#[async_trait]
pub trait InvoiceStorage: Send + Sync {
    /// Store an invoice unless its consultation already has one
    /// Returns the ID of the existing invoice when nothing was stored
    async fn store_invoice(&self, invoice: &Invoice) -> Result<Option<InvoiceId>>;

    /// Retrieve a specific invoice by ID
    async fn get_invoice(&self, invoice_id: InvoiceId) -> Result<Option<Invoice>>;

    /// Find the invoice issued for a consultation, if any
    async fn find_invoice_for_consultation(&self, consultation_id: ConsultationId) -> Result<Option<Invoice>>;

    /// Atomically close an open invoice
    /// Returns false if the invoice was already closed or does not exist
    async fn close_invoice(&self, invoice_id: InvoiceId) -> Result<bool>;
}

/// Trait defining the interface for payment storage operations
#[async_trait]
pub trait PaymentStorage: Send + Sync {
    /// Store a payment
    async fn store_payment(&self, payment: &Payment) -> Result<()>;

    /// Retrieve a specific payment by ID
    async fn get_payment(&self, payment_id: PaymentId) -> Result<Option<Payment>>;

    /// List the stored payments made against one invoice
    async fn list_payments_for_invoice(&self, invoice_id: InvoiceId) -> Result<Vec<Payment>>;
}

/// Trait defining the interface for storage connections
///
/// This trait abstracts away the specific connection type and provides
/// factory methods for creating repositories. This allows the domain
/// layer to work with any storage backend without knowing the implementation details.
pub trait Connection: Send + Sync + Clone + 'static {
    type PatientRepository: PatientStorage + Clone;
    type DoctorRepository: DoctorStorage + Clone;
    type AppointmentRepository: AppointmentStorage + Clone;
    type ConsultationRepository: ConsultationStorage + Clone;
    type InvoiceRepository: InvoiceStorage + Clone;
    type PaymentRepository: PaymentStorage + Clone;

    fn create_patient_repository(&self) -> Self::PatientRepository;
    fn create_doctor_repository(&self) -> Self::DoctorRepository;
    fn create_appointment_repository(&self) -> Self::AppointmentRepository;
    fn create_consultation_repository(&self) -> Self::ConsultationRepository;
    fn create_invoice_repository(&self) -> Self::InvoiceRepository;
    fn create_payment_repository(&self) -> Self::PaymentRepository;

    /// The id sequences shared by every repository of this connection
    fn id_allocator(&self) -> Arc<IdAllocator>;
}
