//! Domain entities of the clinic: who is treated, by whom, when, and how it is paid for.

pub mod appointment;
pub mod consultation;
pub mod doctor;
pub mod ids;
pub mod invoice;
pub mod patient;
pub mod payment;

pub use appointment::{Appointment, AppointmentDetails};
pub use consultation::{Consultation, Prescription, PrescriptionItem};
pub use doctor::{Doctor, Slot};
pub use ids::{AppointmentId, ConsultationId, DoctorId, EntityKind, InvoiceId, PatientId, PaymentId};
pub use invoice::{round_to_cents, Invoice, DEFAULT_TAX_RATE};
pub use patient::Patient;
pub use payment::{Payment, PaymentOutcome};
