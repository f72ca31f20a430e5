//! # REST API for Doctor Management
//!
//! A doctor's DTO lists only the slots that are still free.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::CreateDoctorRequest;
use tracing::info;

use super::error_response;
use super::mappers::doctor_mapper::DoctorMapper;
use crate::domain::models::DoctorId;
use crate::AppState;

/// Register a new doctor
pub async fn create_doctor(
    State(state): State<AppState>,
    Json(request): Json<CreateDoctorRequest>,
) -> impl IntoResponse {
    info!("POST /api/doctors - request: {:?}", request);

    let command = DoctorMapper::to_create_command(request);
    match state.doctor_service.add_doctor(command).await {
        Ok(doctor) => {
            let response = DoctorMapper::to_doctor_response_dto(doctor, "Doctor registered successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Get a doctor by ID, with current free slots
pub async fn get_doctor(State(state): State<AppState>, Path(doctor_id): Path<u64>) -> impl IntoResponse {
    info!("GET /api/doctors/{}", doctor_id);

    match state.doctor_service.require_doctor(DoctorId(doctor_id)).await {
        Ok(doctor) => (StatusCode::OK, Json(DoctorMapper::to_dto(doctor))).into_response(),
        Err(e) => error_response(e),
    }
}

/// List all doctors
pub async fn list_doctors(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/doctors");

    match state.doctor_service.list_doctors().await {
        Ok(doctors) => (StatusCode::OK, Json(DoctorMapper::to_doctor_list_dto(doctors))).into_response(),
        Err(e) => error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use crate::io::rest::test_utils::{get, post, seed_appointment, test_router};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_create_doctor_sorts_slots() {
        let router = test_router().await;

        let (status, body) = post(
            &router,
            "/api/doctors",
            json!({"name": "Dr. Jones", "specialization": "Dermatology", "slots": ["2PM-3PM", "10AM-11AM"]}),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["doctor"]["available_slots"], json!(["10AM-11AM", "2PM-3PM"]));
    }

    #[tokio::test]
    async fn test_booked_slot_disappears_from_doctor() {
        let router = test_router().await;
        seed_appointment(&router).await;

        let (status, body) = get(&router, "/api/doctors/1").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["name"], "Dr. Smith");
        assert_eq!(body["available_slots"], json!([]));

        let (_, body) = get(&router, "/api/doctors").await;
        assert_eq!(body["doctors"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_missing_doctor_is_404() {
        let router = test_router().await;
        let (status, _) = get(&router, "/api/doctors/9").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
