//! # Domain Module
//!
//! Contains all business logic for the clinic: registering patients and
//! doctors, booking slots, recording consultations, issuing invoices and
//! settling them.
//!
//! The services here operate on the storage traits only, so they work with
//! any `Connection` implementation.
//!
//! ## Module Organization
//!
//! - **patient_service**: Patient registration and lookup
//! - **doctor_service**: Doctor registration and slot availability
//! - **appointment_service**: Booking a patient into a doctor's free slot
//! - **consultation_service**: Completing an appointment with a fee and prescription
//! - **invoice_service**: Issuing invoices and computing totals with tax
//! - **payment_service**: Settling invoices
//!
//! ## Business Rules
//!
//! - A slot can be booked by at most one appointment
//! - An appointment can be completed by exactly one consultation
//! - A consultation has at most one invoice
//! - An invoice total is `(fee + item prices) * (1 + tax rate)`, rounded to cents
//! - An invoice is closed by the first payment that covers its total and never reopened

pub mod appointment_service;
pub mod commands;
pub mod consultation_service;
pub mod doctor_service;
pub mod error;
pub mod invoice_service;
pub mod models;
pub mod patient_service;
pub mod payment_service;

#[cfg(test)]
pub mod test_utils;

pub use appointment_service::AppointmentService;
pub use consultation_service::ConsultationService;
pub use doctor_service::DoctorService;
pub use error::ClinicError;
pub use invoice_service::InvoiceService;
pub use patient_service::PatientService;
pub use payment_service::PaymentService;
