//! Conversions between `shared` DTOs and domain models.

pub mod appointment_mapper;
pub mod consultation_mapper;
pub mod doctor_mapper;
pub mod invoice_mapper;
pub mod patient_mapper;
pub mod payment_mapper;
