//! Domain-level command and result types
//! These structs are used by services inside the domain layer and are **not**
//! exposed over the public API. The REST layer is responsible for mapping the
//! public DTOs defined in the `shared` crate to these internal types.

pub mod patients {
    /// Input for registering a patient.
    #[derive(Debug, Clone)]
    pub struct CreatePatientCommand {
        pub name: String,
        pub contact: String,
    }
}

pub mod doctors {
    /// Input for registering a doctor. Slot labels are kept exactly as given.
    #[derive(Debug, Clone)]
    pub struct CreateDoctorCommand {
        pub name: String,
        pub specialization: String,
        pub slots: Vec<String>,
    }
}

pub mod appointments {
    use crate::domain::models::{DoctorId, PatientId, Slot};

    /// Input for booking a slot.
    #[derive(Debug, Clone)]
    pub struct ScheduleAppointmentCommand {
        pub patient_id: PatientId,
        pub doctor_id: DoctorId,
        pub slot: Slot,
    }
}

pub mod consultations {
    use crate::domain::models::{AppointmentId, Consultation};
    use crate::domain::ClinicError;

    /// One prescribed item as supplied by the caller, not yet validated.
    #[derive(Debug, Clone)]
    pub enum PrescriptionItemInput {
        /// Name and price already split apart
        Structured { name: String, price: f64 },
        /// A `name,price` text line
        Line(String),
    }

    impl PrescriptionItemInput {
        /// How the input looked, for reporting rejected items
        pub fn describe(&self) -> String {
            match self {
                PrescriptionItemInput::Structured { name, price } => format!("{},{}", name, price),
                PrescriptionItemInput::Line(line) => line.clone(),
            }
        }
    }

    /// Input for recording a consultation.
    #[derive(Debug, Clone)]
    pub struct RecordConsultationCommand {
        pub appointment_id: AppointmentId,
        pub consultation_fee: f64,
        pub items: Vec<PrescriptionItemInput>,
    }

    /// An item that was skipped while building the prescription.
    #[derive(Debug)]
    pub struct RejectedItem {
        pub input: String,
        pub error: ClinicError,
    }

    /// Result of recording a consultation.
    #[derive(Debug)]
    pub struct RecordConsultationResult {
        pub consultation: Consultation,
        pub rejected_items: Vec<RejectedItem>,
    }
}

pub mod invoices {
    use crate::domain::models::{ConsultationId, Invoice};

    /// Input for issuing an invoice.
    #[derive(Debug, Clone)]
    pub struct GenerateInvoiceCommand {
        pub consultation_id: ConsultationId,
    }

    /// An invoice with its total computed at the moment of the query.
    #[derive(Debug, Clone, PartialEq)]
    pub struct InvoiceSummary {
        pub invoice: Invoice,
        pub total: f64,
    }
}

pub mod payments {
    use crate::domain::models::InvoiceId;

    /// Input for paying an invoice.
    #[derive(Debug, Clone)]
    pub struct RecordPaymentCommand {
        pub invoice_id: InvoiceId,
        pub amount: f64,
    }
}
