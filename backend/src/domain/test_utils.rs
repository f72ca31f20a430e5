//! Shared fixtures for domain service tests.
//!
//! Every `TestClinic` owns a fresh in-memory connection, so id sequences start
//! at 1 and no state leaks between tests.

use crate::domain::commands::appointments::ScheduleAppointmentCommand;
use crate::domain::commands::consultations::{PrescriptionItemInput, RecordConsultationCommand};
use crate::domain::commands::doctors::CreateDoctorCommand;
use crate::domain::commands::patients::CreatePatientCommand;
use crate::domain::models::{Appointment, Consultation, Doctor, Patient, Slot, DEFAULT_TAX_RATE};
use crate::domain::{
    AppointmentService, ConsultationService, DoctorService, InvoiceService, PatientService, PaymentService,
};
use crate::storage::MemoryConnection;

pub struct TestClinic {
    pub connection: MemoryConnection,
    pub patients: PatientService<MemoryConnection>,
    pub doctors: DoctorService<MemoryConnection>,
    pub appointments: AppointmentService<MemoryConnection>,
    pub consultations: ConsultationService<MemoryConnection>,
    pub invoices: InvoiceService<MemoryConnection>,
    pub payments: PaymentService<MemoryConnection>,
}

impl TestClinic {
    pub fn new() -> Self {
        let connection = MemoryConnection::new();
        let patients = PatientService::new(&connection);
        let doctors = DoctorService::new(&connection);
        let appointments = AppointmentService::new(&connection, patients.clone(), doctors.clone());
        let consultations = ConsultationService::new(&connection);
        let invoices = InvoiceService::new(&connection, DEFAULT_TAX_RATE);
        let payments = PaymentService::new(&connection, invoices.clone());

        Self {
            connection,
            patients,
            doctors,
            appointments,
            consultations,
            invoices,
            payments,
        }
    }

    pub async fn add_patient(&self, name: &str, contact: &str) -> Patient {
        self.patients
            .add_patient(CreatePatientCommand {
                name: name.to_string(),
                contact: contact.to_string(),
            })
            .await
            .expect("Failed to add patient")
    }

    pub async fn add_doctor(&self, name: &str, specialization: &str, slots: &[&str]) -> Doctor {
        self.doctors
            .add_doctor(CreateDoctorCommand {
                name: name.to_string(),
                specialization: specialization.to_string(),
                slots: slots.iter().map(|s| s.to_string()).collect(),
            })
            .await
            .expect("Failed to add doctor")
    }

    /// Alice booked with Dr. Smith at 9AM-10AM
    pub async fn scheduled_appointment(&self) -> Appointment {
        let patient = self.add_patient("Alice", "555-1111").await;
        let doctor = self.add_doctor("Dr. Smith", "Cardiology", &["9AM-10AM"]).await;
        self.appointments
            .schedule_appointment(ScheduleAppointmentCommand {
                patient_id: patient.id,
                doctor_id: doctor.id,
                slot: Slot::from("9AM-10AM"),
            })
            .await
            .expect("Failed to schedule appointment")
    }

    /// A completed appointment with the given fee and items
    pub async fn recorded_consultation(&self, fee: f64, items: &[(&str, f64)]) -> Consultation {
        let appointment = self.scheduled_appointment().await;
        self.consultations
            .record_consultation(RecordConsultationCommand {
                appointment_id: appointment.id,
                consultation_fee: fee,
                items: structured_items(items),
            })
            .await
            .expect("Failed to record consultation")
            .consultation
    }
}

pub fn structured_items(items: &[(&str, f64)]) -> Vec<PrescriptionItemInput> {
    items
        .iter()
        .map(|(name, price)| PrescriptionItemInput::Structured {
            name: name.to_string(),
            price: *price,
        })
        .collect()
}
