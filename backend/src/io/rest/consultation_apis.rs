//! # REST API for Consultations
//!
//! Recording a consultation completes its appointment. Prescription items
//! that fail to parse are skipped and listed in `rejected_items`; they do not
//! fail the request.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::{AddPrescriptionItemRequest, RecordConsultationRequest};
use tracing::info;

use super::error_response;
use super::mappers::consultation_mapper::ConsultationMapper;
use crate::domain::models::ConsultationId;
use crate::AppState;

/// Record the consultation for an appointment
pub async fn record_consultation(
    State(state): State<AppState>,
    Json(request): Json<RecordConsultationRequest>,
) -> impl IntoResponse {
    info!("POST /api/consultations - request: {:?}", request);

    let command = ConsultationMapper::to_record_command(request);
    match state.consultation_service.record_consultation(command).await {
        Ok(result) => {
            let response =
                ConsultationMapper::to_consultation_response_dto(result, "Consultation recorded successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Get a consultation by ID
pub async fn get_consultation(
    State(state): State<AppState>,
    Path(consultation_id): Path<u64>,
) -> impl IntoResponse {
    info!("GET /api/consultations/{}", consultation_id);

    match state
        .consultation_service
        .require_consultation(ConsultationId(consultation_id))
        .await
    {
        Ok(consultation) => (StatusCode::OK, Json(ConsultationMapper::to_dto(consultation))).into_response(),
        Err(e) => error_response(e),
    }
}

/// Append an item to a consultation's prescription
pub async fn add_prescription_item(
    State(state): State<AppState>,
    Path(consultation_id): Path<u64>,
    Json(request): Json<AddPrescriptionItemRequest>,
) -> impl IntoResponse {
    info!("POST /api/consultations/{}/items - request: {:?}", consultation_id, request);

    let input = ConsultationMapper::to_item_input(request);
    match state
        .consultation_service
        .add_prescription_item(ConsultationId(consultation_id), input)
        .await
    {
        Ok(consultation) => (StatusCode::OK, Json(ConsultationMapper::to_dto(consultation))).into_response(),
        Err(e) => error_response(e),
    }
}
