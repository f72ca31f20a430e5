//! # REST API for Appointment Scheduling

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::ScheduleAppointmentRequest;
use tracing::info;

use super::error_response;
use super::mappers::appointment_mapper::AppointmentMapper;
use crate::AppState;

/// Book a patient into a doctor's free slot
pub async fn schedule_appointment(
    State(state): State<AppState>,
    Json(request): Json<ScheduleAppointmentRequest>,
) -> impl IntoResponse {
    info!("POST /api/appointments - request: {:?}", request);

    let command = AppointmentMapper::to_schedule_command(request);
    let result = async {
        let appointment = state.appointment_service.schedule_appointment(command).await?;
        state.appointment_service.details(appointment).await
    }
    .await;

    match result {
        Ok(details) => {
            let response = AppointmentMapper::to_appointment_response_dto(details, "Appointment scheduled successfully");
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// List all appointments in scheduling order
pub async fn list_appointments(State(state): State<AppState>) -> impl IntoResponse {
    info!("GET /api/appointments");

    match state.appointment_service.list_appointment_details().await {
        Ok(appointments) => {
            (StatusCode::OK, Json(AppointmentMapper::to_appointment_list_dto(appointments))).into_response()
        }
        Err(e) => error_response(e),
    }
}
