//! # REST API for Payments
//!
//! An under-paying payment is answered with `200 OK` and `settled: false`;
//! only a settling payment returns `201 Created`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use shared::RecordPaymentRequest;
use tracing::info;

use super::error_response;
use super::mappers::payment_mapper::PaymentMapper;
use crate::domain::models::PaymentId;
use crate::AppState;

/// Attempt to settle an invoice
pub async fn record_payment(
    State(state): State<AppState>,
    Json(request): Json<RecordPaymentRequest>,
) -> impl IntoResponse {
    info!("POST /api/payments - request: {:?}", request);

    let command = PaymentMapper::to_record_command(request);
    match state.payment_service.record_payment(command).await {
        Ok(outcome) => {
            let status = if outcome.is_settled() {
                StatusCode::CREATED
            } else {
                StatusCode::OK
            };
            (status, Json(PaymentMapper::to_payment_response_dto(outcome))).into_response()
        }
        Err(e) => error_response(e),
    }
}

/// Get a settled payment by ID
pub async fn get_payment(State(state): State<AppState>, Path(payment_id): Path<u64>) -> impl IntoResponse {
    info!("GET /api/payments/{}", payment_id);

    match state.payment_service.require_payment(PaymentId(payment_id)).await {
        Ok(payment) => (StatusCode::OK, Json(PaymentMapper::to_dto(payment))).into_response(),
        Err(e) => error_response(e),
    }
}
