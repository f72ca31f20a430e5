//! In-memory storage backend. Nothing survives a restart.

pub mod appointment_repository;
pub mod connection;
pub mod consultation_repository;
pub mod doctor_repository;
pub mod invoice_repository;
pub mod patient_repository;
pub mod payment_repository;

pub use appointment_repository::AppointmentRepository;
pub use connection::MemoryConnection;
pub use consultation_repository::ConsultationRepository;
pub use doctor_repository::DoctorRepository;
pub use invoice_repository::InvoiceRepository;
pub use patient_repository::PatientRepository;
pub use payment_repository::PaymentRepository;
