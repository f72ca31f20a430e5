//! # REST API for Patient Management

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::CreatePatientRequest;
use tracing::info;

use super::error_response;
use super::mappers::patient_mapper::PatientMapper;
use crate::domain::models::PatientId;
use crate::AppState;

/// Register a new patient
pub async fn create_patient(
    State(state): State<AppState>,
    Json(request): Json<CreatePatientRequest>,
) -> impl IntoResponse {
    info!("POST /api/patients - request: {:?}", request);

    let command = PatientMapper::to_create_command(request);
    match state.patient_service.add_patient(command).await {
        Ok(patient) => {
            let response = PatientMapper::to_patient_response_dto(patient, "Patient registered successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Get a patient by ID
pub async fn get_patient(State(state): State<AppState>, Path(patient_id): Path<u64>) -> impl IntoResponse {
    info!("GET /api/patients/{}", patient_id);

    match state.patient_service.require_patient(PatientId(patient_id)).await {
        Ok(patient) => (StatusCode::OK, Json(PatientMapper::to_dto(patient))).into_response(),
        Err(e) => error_response(e),
    }
}

/// List all patients
pub async fn list_patients(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/patients");

    match state.patient_service.list_patients().await {
        Ok(patients) => (StatusCode::OK, Json(PatientMapper::to_patient_list_dto(patients))).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_utils::{get, post, test_router};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_and_get_patient() {
        let router = test_router().await;

        let (status, body) = post(&router, "/api/patients", json!({"name": "Alice", "contact": "555-1111"})).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["patient"]["id"], 1);
        assert_eq!(body["patient"]["name"], "Alice");

        let (status, body) = get(&router, "/api/patients/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["contact"], "555-1111");

        let (status, body) = get(&router, "/api/patients").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["patients"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_patient_is_404() {
        let router = test_router().await;
        let (status, body) = get(&router, "/api/patients/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["kind"], "not_found");
    }

    #[tokio::test]
    async fn test_blank_name_is_422() {
        let router = test_router().await;
        let (status, body) = post(&router, "/api/patients", json!({"name": "  ", "contact": "x"})).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["kind"], "validation");
    }
}
