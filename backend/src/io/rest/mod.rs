//! # REST API Interface Layer
//!
//! HTTP endpoints for the clinic, mounted under `/api`:
//!
//! - `POST /patients`, `GET /patients`, `GET /patients/:id`
//! - `POST /doctors`, `GET /doctors`, `GET /doctors/:id`
//! - `POST /appointments`, `GET /appointments`
//! - `POST /consultations`, `GET /consultations/:id`
//! - `POST /invoices`, `GET /invoices/:id`
//! - `POST /payments`, `GET /payments/:id`
//!
//! Handlers contain no business logic. They log the request, map the DTO into
//! a domain command, call the service, and map the result back.

pub mod appointment_apis;
pub mod consultation_apis;
pub mod doctor_apis;
pub mod invoice_apis;
pub mod mappers;
pub mod patient_apis;
pub mod payment_apis;

#[cfg(test)]
pub mod test_utils;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::{error, warn};

use crate::domain::ClinicError;

/// HTTP status for a domain error
pub fn status_for(error: &ClinicError) -> StatusCode {
    match error {
        ClinicError::NotFound { .. } => StatusCode::NOT_FOUND,
        ClinicError::SlotUnavailable { .. }
        | ClinicError::AlreadyCompleted { .. }
        | ClinicError::InvoiceAlreadyClosed { .. }
        | ClinicError::InvoiceAlreadyExists { .. }
        | ClinicError::PrescriptionLocked { .. } => StatusCode::CONFLICT,
        ClinicError::InvalidItemFormat(_)
        | ClinicError::InsufficientPayment { .. }
        | ClinicError::InvalidFee(_)
        | ClinicError::InvalidAmount(_)
        | ClinicError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ClinicError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Translate a domain error into a JSON error response
pub fn error_response(error: ClinicError) -> Response {
    let status = status_for(&error);
    if status.is_server_error() {
        error!("Request failed: {}", error);
    } else {
        warn!("Request rejected ({}): {}", status, error);
    }

    let body = ErrorResponse {
        kind: error.kind().to_string(),
        message: error.to_string(),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{DoctorId, EntityKind, InvoiceId, Slot};

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            status_for(&ClinicError::not_found(EntityKind::Patient, 4u64)),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_for(&ClinicError::SlotUnavailable {
                doctor_id: DoctorId(1),
                slot: Slot::from("9AM-10AM"),
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(&ClinicError::InvoiceAlreadyClosed { invoice_id: InvoiceId(2) }),
            StatusCode::CONFLICT
        );
        assert_eq!(status_for(&ClinicError::InvalidFee(-1.0)), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            status_for(&ClinicError::Storage(anyhow::anyhow!("lock poisoned"))),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_error_body_carries_kind_and_message() {
        let response = error_response(ClinicError::Validation("Patient name cannot be empty".to_string()));
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.kind, "validation");
        assert_eq!(body.message, "Patient name cannot be empty");
    }
}
