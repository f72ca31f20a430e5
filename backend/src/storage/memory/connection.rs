//! In-memory storage connection.
//!
//! All clinic state lives in process memory and is lost on shutdown. Each
//! table sits behind its own `RwLock`. Rows that take part in a
//! check-then-act transition (doctor slots, appointment completion, invoice
//! closing) are additionally wrapped in a per-row `Mutex`, so contention on
//! one doctor or invoice never blocks the others.

use anyhow::{anyhow, Result};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{
    AppointmentRepository, ConsultationRepository, DoctorRepository, InvoiceRepository,
    PatientRepository, PaymentRepository,
};
use crate::domain::models::{
    Appointment, AppointmentId, Consultation, ConsultationId, Doctor, DoctorId, Invoice, InvoiceId,
    Patient, PatientId, Payment, PaymentId,
};
use crate::storage::{Connection, IdAllocator};

/// Invoices plus the consultation index that keeps them one-per-consultation
#[derive(Default)]
pub(crate) struct InvoiceTable {
    pub(crate) by_id: BTreeMap<InvoiceId, Arc<Mutex<Invoice>>>,
    pub(crate) by_consultation: HashMap<ConsultationId, InvoiceId>,
}

#[derive(Default)]
pub(crate) struct Tables {
    pub(crate) patients: RwLock<BTreeMap<PatientId, Patient>>,
    pub(crate) doctors: RwLock<BTreeMap<DoctorId, Arc<Mutex<Doctor>>>>,
    pub(crate) appointments: RwLock<BTreeMap<AppointmentId, Arc<Mutex<Appointment>>>>,
    pub(crate) consultations: RwLock<BTreeMap<ConsultationId, Consultation>>,
    pub(crate) invoices: RwLock<InvoiceTable>,
    pub(crate) payments: RwLock<BTreeMap<PaymentId, Payment>>,
}

/// MemoryConnection owns the in-memory tables and id sequences
#[derive(Clone)]
pub struct MemoryConnection {
    tables: Arc<Tables>,
    ids: Arc<IdAllocator>,
}

impl Default for MemoryConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryConnection {
    /// Create an empty store with every id sequence starting at 1
    pub fn new() -> Self {
        Self::with_allocator(Arc::new(IdAllocator::new()))
    }

    /// Create an empty store that draws ids from `ids`
    pub fn with_allocator(ids: Arc<IdAllocator>) -> Self {
        Self {
            tables: Arc::new(Tables::default()),
            ids,
        }
    }

    pub(crate) fn tables(&self) -> &Tables {
        &self.tables
    }
}

impl Connection for MemoryConnection {
    type PatientRepository = PatientRepository;
    type DoctorRepository = DoctorRepository;
    type AppointmentRepository = AppointmentRepository;
    type ConsultationRepository = ConsultationRepository;
    type InvoiceRepository = InvoiceRepository;
    type PaymentRepository = PaymentRepository;

    fn create_patient_repository(&self) -> Self::PatientRepository {
        PatientRepository::new(self.clone())
    }

    fn create_doctor_repository(&self) -> Self::DoctorRepository {
        DoctorRepository::new(self.clone())
    }

    fn create_appointment_repository(&self) -> Self::AppointmentRepository {
        AppointmentRepository::new(self.clone())
    }

    fn create_consultation_repository(&self) -> Self::ConsultationRepository {
        ConsultationRepository::new(self.clone())
    }

    fn create_invoice_repository(&self) -> Self::InvoiceRepository {
        InvoiceRepository::new(self.clone())
    }

    fn create_payment_repository(&self) -> Self::PaymentRepository {
        PaymentRepository::new(self.clone())
    }

    fn id_allocator(&self) -> Arc<IdAllocator> {
        Arc::clone(&self.ids)
    }
}

pub(crate) fn read_table<'a, T>(lock: &'a RwLock<T>, table: &str) -> Result<RwLockReadGuard<'a, T>> {
    lock.read().map_err(|_| anyhow!("{} table lock poisoned", table))
}

pub(crate) fn write_table<'a, T>(lock: &'a RwLock<T>, table: &str) -> Result<RwLockWriteGuard<'a, T>> {
    lock.write().map_err(|_| anyhow!("{} table lock poisoned", table))
}

pub(crate) fn lock_row<'a, T>(row: &'a Mutex<T>, table: &str) -> Result<MutexGuard<'a, T>> {
    row.lock().map_err(|_| anyhow!("{} row lock poisoned", table))
}
