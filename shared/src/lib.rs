use serde::{Deserialize, Serialize};

/// A registered patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u64,
    pub name: String,
    pub contact: String,
}

/// A registered doctor together with the slots that are still free
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Doctor {
    pub id: u64,
    pub name: String,
    pub specialization: String,
    /// Currently bookable slot labels, sorted
    pub available_slots: Vec<String>,
}

/// An appointment between a patient and a doctor for one slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: u64,
    pub patient_id: u64,
    pub patient_name: String,
    pub doctor_id: u64,
    pub doctor_name: String,
    /// Opaque slot label, e.g. "9AM-10AM"
    pub slot: String,
    pub completed: bool,
}

/// A single prescribed item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrescriptionItem {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consultation {
    pub id: u64,
    pub appointment_id: u64,
    pub consultation_fee: f64,
    pub items: Vec<PrescriptionItem>,
    /// Sum of all item prices
    pub items_cost: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: u64,
    pub consultation_id: u64,
    pub tax_rate: f64,
    /// Fee plus items plus tax, computed when the response is built
    pub total: f64,
    pub closed: bool,
    /// RFC 3339 timestamp
    pub issued_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u64,
    pub invoice_id: u64,
    pub amount: f64,
    pub settled: bool,
    /// RFC 3339 timestamp
    pub recorded_at: String,
}

/// Request to register a patient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientResponse {
    pub patient: Patient,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatientListResponse {
    pub patients: Vec<Patient>,
}

/// Request to register a doctor with an initial set of bookable slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDoctorRequest {
    pub name: String,
    pub specialization: String,
    pub slots: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorResponse {
    pub doctor: Doctor,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorListResponse {
    pub doctors: Vec<Doctor>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleAppointmentRequest {
    pub patient_id: u64,
    pub doctor_id: u64,
    pub slot: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentResponse {
    pub appointment: Appointment,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<Appointment>,
}

/// Request to record a consultation against a scheduled appointment.
///
/// Items may be given as structured entries, as `name,price` text lines, or both.
/// Structured items come first in the resulting prescription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordConsultationRequest {
    pub appointment_id: u64,
    pub consultation_fee: f64,
    #[serde(default)]
    pub items: Vec<PrescriptionItem>,
    #[serde(default)]
    pub item_lines: Vec<String>,
}

/// An item that was not added to the prescription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedItem {
    pub input: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationResponse {
    pub consultation: Consultation,
    pub rejected_items: Vec<RejectedItem>,
    pub success_message: String,
}

/// Request to append one item to a consultation that has not been invoiced yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddPrescriptionItemRequest {
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateInvoiceRequest {
    pub consultation_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub invoice: Invoice,
    pub success_message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordPaymentRequest {
    pub invoice_id: u64,
    pub amount: f64,
}

/// Result of a payment attempt. `settled == false` means the invoice is still open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentResponse {
    pub payment: Payment,
    pub settled: bool,
    pub amount_due: f64,
    pub message: String,
}

/// Error body returned by every failing endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error kind, e.g. "slot_unavailable"
    pub kind: String,
    pub message: String,
}
