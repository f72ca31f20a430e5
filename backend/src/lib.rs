//! # Clinic Backend
//!
//! Patient registration, appointment scheduling against doctor slots,
//! consultations with prescriptions, taxed invoices and payments.
//!
//! ## Architecture
//!
//! ```text
//! IO Layer (REST API, handlers, mappers)
//!     ↓
//! Domain Layer (services, models, commands)
//!     ↓
//! Storage Layer (storage traits, in-memory repositories)
//! ```
//!
//! `initialize_backend` wires every service to one `MemoryConnection`, so all
//! services share the same tables and id sequences.

pub mod config;
pub mod domain;
pub mod io;
pub mod logging;
pub mod storage;

use anyhow::Result;
use axum::{
    http::{HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::config::ClinicConfig;
use crate::domain::{
    AppointmentService, ConsultationService, DoctorService, InvoiceService, PatientService, PaymentService,
};
use crate::io::rest::{appointment_apis, consultation_apis, doctor_apis, invoice_apis, patient_apis, payment_apis};
use crate::storage::MemoryConnection;

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub patient_service: PatientService<MemoryConnection>,
    pub doctor_service: DoctorService<MemoryConnection>,
    pub appointment_service: AppointmentService<MemoryConnection>,
    pub consultation_service: ConsultationService<MemoryConnection>,
    pub invoice_service: InvoiceService<MemoryConnection>,
    pub payment_service: PaymentService<MemoryConnection>,
}

/// Initialize the backend with all required services
pub async fn initialize_backend(config: &ClinicConfig) -> Result<AppState> {
    config.validate()?;

    info!("Setting up in-memory storage");
    let connection = MemoryConnection::new();

    info!("Setting up domain services (tax rate {})", config.tax_rate);
    let patient_service = PatientService::new(&connection);
    let doctor_service = DoctorService::new(&connection);
    let appointment_service = AppointmentService::new(&connection, patient_service.clone(), doctor_service.clone());
    let consultation_service = ConsultationService::new(&connection);
    let invoice_service = InvoiceService::new(&connection, config.tax_rate);
    let payment_service = PaymentService::new(&connection, invoice_service.clone());

    Ok(AppState {
        patient_service,
        doctor_service,
        appointment_service,
        consultation_service,
        invoice_service,
        payment_service,
    })
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState, config: &ClinicConfig) -> Result<Router> {
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origin.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    let api_routes = Router::new()
        .route(
            "/patients",
            get(patient_apis::list_patients).post(patient_apis::create_patient),
        )
        .route("/patients/:id", get(patient_apis::get_patient))
        .route("/doctors", get(doctor_apis::list_doctors).post(doctor_apis::create_doctor))
        .route("/doctors/:id", get(doctor_apis::get_doctor))
        .route(
            "/appointments",
            get(appointment_apis::list_appointments).post(appointment_apis::schedule_appointment),
        )
        .route("/consultations", post(consultation_apis::record_consultation))
        .route("/consultations/:id", get(consultation_apis::get_consultation))
        .route("/consultations/:id/items", post(consultation_apis::add_prescription_item))
        .route("/invoices", post(invoice_apis::generate_invoice))
        .route("/invoices/:id", get(invoice_apis::get_invoice))
        .route("/payments", post(payment_apis::record_payment))
        .route("/payments/:id", get(payment_apis::get_payment));

    Ok(Router::new().nest("/api", api_routes).layer(cors).with_state(app_state))
}
